// Career matching engine: scoring, the search/filter/sort pipeline, and
// score banding. Pure functions only — handlers adapt them to HTTP.

pub mod handlers;
pub mod labels;
pub mod pipeline;
pub mod scoring;
