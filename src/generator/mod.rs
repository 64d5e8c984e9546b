pub mod corpus;
pub mod selector;
