// ESPN public-API integration: the HTTP fallback chain and the tolerant
// response extraction that feeds the normalizer.

pub mod client;
pub mod extract;
