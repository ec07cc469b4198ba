//! Fixed multilingual sample messages used by the smoke test and the
//! language self-test.

/// A message paired with the language it is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleMessage {
    pub label: &'static str,
    pub text: &'static str,
}

impl SampleMessage {
    pub const fn new(label: &'static str, text: &'static str) -> Self {
        Self { label, text }
    }
}

/// Samples submitted to the prediction endpoint
pub const API_SAMPLES: [SampleMessage; 5] = [
    SampleMessage::new(
        "english",
        "Hello, this is an English message. Free money now!",
    ),
    SampleMessage::new("bangla", "আপনি ১ লক্ষ টাকা জিতেছেন! কল করুন"),
    SampleMessage::new("spanish", "¡Felicitaciones! Has ganado 1000 euros gratis"),
    SampleMessage::new("french", "Bonjour! Vous avez gagné 1000 euros gratuits"),
    SampleMessage::new("german", "Hallo! Sie haben 1000 Euro gewonnen"),
];

/// Samples run through the local detector: the API set plus Chinese
pub const LANGUAGE_SAMPLES: [SampleMessage; 6] = [
    API_SAMPLES[0],
    API_SAMPLES[1],
    API_SAMPLES[2],
    API_SAMPLES[3],
    API_SAMPLES[4],
    SampleMessage::new("chinese", "你好，你赢了1000元"),
];
