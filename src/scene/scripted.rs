use crate::{
    animation::motion::{
        DEFAULT_ENTRANCE_FRAMES, DEFAULT_SLIDE_DISTANCE, DEFAULT_STAGGER_BASE_DELAY,
        DEFAULT_STAGGER_FRAMES, Entrance, fade_slide_in, staggered_fade_in,
    },
    foundation::core::FrameIndex,
    foundation::error::{ReelError, ReelResult},
    timeline::segment::Scene,
};

/// How one element of a scene makes its entrance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntranceCue {
    /// Fade in while rising by `distance` pixels.
    FadeSlide {
        #[serde(default)]
        delay: u64,
        #[serde(default = "default_duration")]
        duration: u64,
        #[serde(default = "default_distance")]
        distance: f64,
    },
    /// Item `index` of a list entering `index * stagger` frames after the first item.
    Staggered {
        index: usize,
        #[serde(default = "default_base_delay")]
        base_delay: u64,
        #[serde(default = "default_stagger")]
        stagger: u64,
        #[serde(default = "default_duration")]
        duration: u64,
    },
    /// Visible from the first frame.
    Static,
}

fn default_duration() -> u64 {
    DEFAULT_ENTRANCE_FRAMES
}

fn default_distance() -> f64 {
    DEFAULT_SLIDE_DISTANCE
}

fn default_base_delay() -> u64 {
    DEFAULT_STAGGER_BASE_DELAY
}

fn default_stagger() -> u64 {
    DEFAULT_STAGGER_FRAMES
}

impl EntranceCue {
    pub fn sample(&self, local_frame: FrameIndex) -> ReelResult<Entrance> {
        match *self {
            Self::FadeSlide {
                delay,
                duration,
                distance,
            } => fade_slide_in(local_frame, delay, duration, distance),
            Self::Staggered {
                index,
                base_delay,
                stagger,
                duration,
            } => staggered_fade_in(local_frame, index, base_delay, stagger, duration),
            Self::Static => Ok(Entrance::SETTLED),
        }
    }

    fn duration(&self) -> Option<u64> {
        match *self {
            Self::FadeSlide { duration, .. } | Self::Staggered { duration, .. } => Some(duration),
            Self::Static => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementCue {
    pub id: String,
    pub entrance: EntranceCue,
}

/// Per-element state for one local frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementVisual {
    pub id: String,
    pub opacity: f64,
    pub offset_y: f64,
}

/// Visual description handed to the render collaborator.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneVisual {
    pub scene: String,
    pub elements: Vec<ElementVisual>,
}

/// A scene described as a list of elements with entrance cues.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptedScene {
    pub id: String,
    #[serde(default)]
    pub elements: Vec<ElementCue>,
}

impl ScriptedScene {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            elements: Vec::new(),
        }
    }

    pub fn element(mut self, id: impl Into<String>, entrance: EntranceCue) -> Self {
        self.elements.push(ElementCue {
            id: id.into(),
            entrance,
        });
        self
    }

    /// Append `ids` as a staggered list using the default timing.
    pub fn staggered_list<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for (index, id) in ids.into_iter().enumerate() {
            self.elements.push(ElementCue {
                id: id.into(),
                entrance: EntranceCue::Staggered {
                    index,
                    base_delay: DEFAULT_STAGGER_BASE_DELAY,
                    stagger: DEFAULT_STAGGER_FRAMES,
                    duration: DEFAULT_ENTRANCE_FRAMES,
                },
            });
        }
        self
    }

    pub fn validate(&self) -> ReelResult<()> {
        for el in &self.elements {
            if el.entrance.duration() == Some(0) {
                return Err(ReelError::configuration(format!(
                    "element '{}' in scene '{}' has a zero-length entrance",
                    el.id, self.id
                )));
            }
        }
        Ok(())
    }
}

impl Scene for ScriptedScene {
    type Visual = SceneVisual;

    fn render(&self, local_frame: FrameIndex) -> ReelResult<SceneVisual> {
        let elements = self
            .elements
            .iter()
            .map(|el| {
                let e = el.entrance.sample(local_frame)?;
                Ok(ElementVisual {
                    id: el.id.clone(),
                    opacity: e.opacity,
                    offset_y: e.offset_y,
                })
            })
            .collect::<ReelResult<Vec<_>>>()?;
        Ok(SceneVisual {
            scene: self.id.clone(),
            elements,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/scripted.rs"]
mod tests;
