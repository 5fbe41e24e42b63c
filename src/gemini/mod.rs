// Generative-language review backend.
//
// The ReviewModel trait is what the review pipeline talks to. GeminiClient
// implements it over Google's generateContent endpoint; tests plug in a
// canned model instead.

pub mod client;
pub mod prompts;
pub mod traits;
