// Kindling: hype classification for meme-coin chatter.
//
// This is the library root. Each module corresponds to one stage of the
// classification pipeline: ingest posts, derive feature vectors from the
// keyword lexicon, score the weighted aggregate, emit the result.

pub mod lexicon;
pub mod output;
pub mod posts;
pub mod scoring;
pub mod vector;
