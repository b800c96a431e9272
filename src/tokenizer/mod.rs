pub mod scan;
pub mod token;

pub use scan::tokenize;
pub use token::{KeywordInstance, KeywordToken, Token, keyword_instances};
