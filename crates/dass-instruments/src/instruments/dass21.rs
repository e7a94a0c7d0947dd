use dass_core::models::assessment::Severity;

use crate::scoring::{SeverityRange, Subscale};
use crate::{Instrument, Item};

/// DASS-21: Depression Anxiety Stress Scales, short form.
/// 21 items rated 0–3 over the past week, 7 per subscale. Subscale sums are
/// doubled, giving scores 0–42.
pub struct Dass21;

pub const DEPRESSION: &str = "depression";
pub const ANXIETY: &str = "anxiety";
pub const STRESS: &str = "stress";

const DEPRESSION_ITEMS: [&str; 7] = [
    "I couldn't seem to experience any positive feeling at all.",
    "I found it difficult to work up the initiative to do things.",
    "I felt that I had nothing to look forward to.",
    "I felt down-hearted and blue.",
    "I was unable to become enthusiastic about anything.",
    "I felt I wasn't worth much as a person.",
    "I felt that life was meaningless.",
];

const ANXIETY_ITEMS: [&str; 7] = [
    "I was aware of dryness of my mouth.",
    "I experienced breathing difficulty (e.g., excessively rapid breathing, breathlessness in the absence of physical exertion).",
    "I experienced trembling (e.g., in the hands).",
    "I was worried about situations in which I might panic and make a fool of myself.",
    "I felt I was close to panic.",
    "I was aware of the beating of my heart in the absence of physical exertion.",
    "I felt scared without any good reason.",
];

const STRESS_ITEMS: [&str; 7] = [
    "I found it hard to wind down.",
    "I tended to over-react to situations.",
    "I felt that I was using a lot of nervous energy.",
    "I found myself getting agitated.",
    "I found it difficult to relax.",
    "I was intolerant of anything that kept me from getting on with what I was doing.",
    "I felt that I was rather touchy.",
];

impl Instrument for Dass21 {
    fn id(&self) -> &str {
        "dass21"
    }

    fn name(&self) -> &str {
        "DASS-21"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            [
                (DEPRESSION, DEPRESSION_ITEMS),
                (ANXIETY, ANXIETY_ITEMS),
                (STRESS, STRESS_ITEMS),
            ]
            .iter()
            .flat_map(|(subscale_id, texts)| texts.iter().map(move |text| (*subscale_id, *text)))
            .enumerate()
            .map(|(index, (subscale_id, text))| Item {
                number: index + 1,
                text: text.to_string(),
                subscale_id: subscale_id.to_string(),
            })
            .collect()
        });
        &ITEMS
    }

    fn subscales(&self) -> &[Subscale] {
        static SUBSCALES: std::sync::LazyLock<Vec<Subscale>> = std::sync::LazyLock::new(|| {
            use Severity::*;

            vec![
                subscale(
                    DEPRESSION,
                    "Depression",
                    "Dysphoria, hopelessness, devaluation of life, self-deprecation, lack of interest, anhedonia and inertia.",
                    0,
                    vec![
                        SeverityRange::new(0, 9, Normal, "Your score is within the normal range, suggesting you are not experiencing significant depressive symptoms at this time."),
                        SeverityRange::new(10, 13, Mild, "You may be experiencing some mild depressive symptoms. Monitor your wellbeing and consider self-care strategies."),
                        SeverityRange::new(14, 20, Moderate, "Your score suggests a moderate level of depressive symptoms. Consider talking with a mental health professional for support."),
                        SeverityRange::new(21, 27, Severe, "Your score indicates severe depressive symptoms. Professional support is strongly recommended."),
                        SeverityRange::new(28, 42, ExtremelySevere, "Your score indicates extremely severe depressive symptoms. Immediate professional support is advised."),
                    ],
                ),
                subscale(
                    ANXIETY,
                    "Anxiety",
                    "Autonomic arousal, skeletal muscle effects, situational anxiety and subjective experience of anxious affect.",
                    7,
                    vec![
                        SeverityRange::new(0, 7, Normal, "Your score is within the normal range, suggesting minimal anxiety symptoms."),
                        SeverityRange::new(8, 9, Mild, "You may be experiencing mild anxiety. Mindfulness and stress-reduction techniques may help."),
                        SeverityRange::new(10, 14, Moderate, "Your score suggests moderate anxiety. Consider professional guidance to manage symptoms."),
                        SeverityRange::new(15, 19, Severe, "Your score indicates severe anxiety. Seeking professional support is recommended."),
                        SeverityRange::new(20, 42, ExtremelySevere, "Your score indicates extremely severe anxiety symptoms. Urgent professional support is advised."),
                    ],
                ),
                subscale(
                    STRESS,
                    "Stress",
                    "Difficulty relaxing, nervous arousal, and being easily upset, irritable and impatient.",
                    14,
                    vec![
                        SeverityRange::new(0, 14, Normal, "Your score is within the normal range, suggesting your stress levels are manageable."),
                        SeverityRange::new(15, 18, Mild, "You may be experiencing mild stress. Self-care and time-management techniques may help."),
                        SeverityRange::new(19, 25, Moderate, "Your score suggests moderate stress. Consider professional or peer support to manage workload and lifestyle pressures."),
                        SeverityRange::new(26, 33, Severe, "Your score indicates severe stress. Professional support is recommended."),
                        SeverityRange::new(34, 42, ExtremelySevere, "Your score indicates extremely severe stress levels. Immediate intervention is advised."),
                    ],
                ),
            ]
        });
        &SUBSCALES
    }
}

/// Seven consecutive items starting at `first_item`.
fn subscale(
    id: &str,
    name: &str,
    description: &str,
    first_item: usize,
    ranges: Vec<SeverityRange>,
) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: name.to_string(),
        items: (first_item..first_item + 7).collect(),
        ranges,
        description: Some(description.to_string()),
    }
}
