pub mod inflect;
pub mod lexicon;
pub mod phrase;
pub mod pipeline;
pub mod probability;
pub mod sentence;
