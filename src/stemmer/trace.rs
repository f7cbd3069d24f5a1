//! Per-stage record of one stemming call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stage of the rule pipeline, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Step1ab,
    Step1c,
    Step2,
    Step3,
    Step4,
    Step5,
}

impl Stage {
    /// All stages in the order they run.
    pub const ALL: [Stage; 6] = [
        Stage::Step1ab,
        Stage::Step1c,
        Stage::Step2,
        Stage::Step3,
        Stage::Step4,
        Stage::Step5,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Step1ab => "step1ab",
            Stage::Step1c => "step1c",
            Stage::Step2 => "step2",
            Stage::Step3 => "step3",
            Stage::Step4 => "step4",
            Stage::Step5 => "step5",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What decided the result of a stemming call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The word is a registered irregular form.
    Irregular,
    /// The word is too short to stem and was returned unchanged.
    Short,
    /// The rule pipeline ran.
    Pipeline,
}

/// The active word right after a stage ran.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOutput {
    pub stage: Stage,
    pub word: String,
}

/// Full record of one stemming call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemTrace {
    /// The input word.
    pub word: String,
    pub outcome: Outcome,
    /// One entry per stage when `outcome` is [`Outcome::Pipeline`], else empty.
    pub stages: Vec<StageOutput>,
    /// The final stem.
    pub stem: String,
}

impl StemTrace {
    /// The active word after `stage`, if the pipeline ran.
    pub fn after(&self, stage: Stage) -> Option<&str> {
        self.stages
            .iter()
            .find(|output| output.stage == stage)
            .map(|output| output.word.as_str())
    }

    /// Stages that changed the active word.
    pub fn changed_stages(&self) -> Vec<Stage> {
        let mut previous = self.word.as_str();
        let mut changed = Vec::new();
        for output in &self.stages {
            if output.word != previous {
                changed.push(output.stage);
            }
            previous = &output.word;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StemTrace {
        StemTrace {
            word: "hopeful".to_string(),
            outcome: Outcome::Pipeline,
            stages: vec![
                StageOutput { stage: Stage::Step1ab, word: "hopeful".to_string() },
                StageOutput { stage: Stage::Step1c, word: "hopeful".to_string() },
                StageOutput { stage: Stage::Step2, word: "hopeful".to_string() },
                StageOutput { stage: Stage::Step3, word: "hope".to_string() },
                StageOutput { stage: Stage::Step4, word: "hope".to_string() },
                StageOutput { stage: Stage::Step5, word: "hope".to_string() },
            ],
            stem: "hope".to_string(),
        }
    }

    #[test]
    fn test_after() {
        let trace = sample();
        assert_eq!(trace.after(Stage::Step2), Some("hopeful"));
        assert_eq!(trace.after(Stage::Step3), Some("hope"));
    }

    #[test]
    fn test_changed_stages() {
        assert_eq!(sample().changed_stages(), vec![Stage::Step3]);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Step1ab.to_string(), "step1ab");
        assert_eq!(Stage::ALL.len(), 6);
    }
}
