pub mod bank;
pub mod composer;
pub mod dice;
pub mod engine;
pub mod oracle;
pub mod source;
pub mod word_list;
