//! WASM bindings for koine-sentence — powers the web page version.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use koine_sentence::core::probability::Probabilities;
use koine_sentence::{strip_annotations, SentenceGenerator};

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct GeneratedSentence {
    text: String,
    parsing: String,
}

fn build(seed: u64, probabilities: Probabilities) -> Result<SentenceGenerator, JsError> {
    SentenceGenerator::builder()
        .seed(seed)
        .annotate(true)
        .with_probabilities(probabilities)
        .build()
        .map_err(|e| JsError::new(&format!("Generator build error: {e}")))
}

// ---------------------------------------------------------------------------
// SentenceDemo — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct SentenceDemo {
    generator: SentenceGenerator,
    batches: u64,
}

#[wasm_bindgen]
impl SentenceDemo {
    /// Create a new demo instance with the built-in vocabulary.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<SentenceDemo, JsError> {
        Ok(SentenceDemo {
            generator: build(seed, Probabilities::default())?,
            batches: 0,
        })
    }

    /// Generate `count` sentences as a JSON array of `{text, parsing}`.
    ///
    /// Each call continues with a new batch; `reset` starts over.
    pub fn generate(&mut self, count: usize) -> Result<String, JsError> {
        let mut rng = StdRng::seed_from_u64(self.generator.seed().wrapping_add(self.batches));
        self.batches += 1;
        let parsed = self.generator.generate_with(&mut rng, count);

        let sentences: Vec<GeneratedSentence> = parsed
            .into_iter()
            .map(|parsing| GeneratedSentence {
                text: strip_annotations(&parsing),
                parsing,
            })
            .collect();
        serde_json::to_string(&sentences).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Current probabilities as JSON.
    pub fn probabilities(&self) -> Result<String, JsError> {
        serde_json::to_string(self.generator.probabilities()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Replace probabilities from JSON; missing fields keep their defaults.
    pub fn set_probabilities(&mut self, json: &str) -> Result<(), JsError> {
        let probabilities: Probabilities = serde_json::from_str(json)
            .map_err(|e| JsError::new(&format!("Invalid probabilities JSON: {e}")))?;
        self.generator = build(self.generator.seed(), probabilities)?;
        Ok(())
    }

    /// Reset with a new seed.
    pub fn reset(&mut self, seed: u64) -> Result<(), JsError> {
        self.generator = build(seed, *self.generator.probabilities())?;
        self.batches = 0;
        Ok(())
    }
}
