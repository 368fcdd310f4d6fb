//! JSON presentation description: frame rate, canvas, crossfade width, scenes and overlay.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    animation::{ease::Ease, motion::stagger_delay},
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    scene::scripted::{ElementCue, EntranceCue, ScriptedScene},
    timeline::{builder::TimelineBuilder, compositor::Timeline, overlay::Overlay},
};

/// Frames in a regular content slide (10 s at 30 fps).
pub const SLIDE_FRAMES: u64 = 300;
/// Overlap between adjacent scenes.
pub const TRANSITION_FRAMES: u64 = 12;

const VIDEO_INTRO_FRAMES: u64 = 156;
const LOGO_FRAMES: u64 = 150;
const LONG_SLIDE_FRAMES: u64 = SLIDE_FRAMES + 90;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PresentationConfig {
    pub fps: Fps,
    pub canvas: Canvas,
    pub transition: u64,
    #[serde(default)]
    pub ease: Ease,
    pub scenes: Vec<SceneConfig>,
    #[serde(default)]
    pub overlay: Option<OverlayConfig>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    pub id: String,
    pub duration: u64,
    #[serde(default)]
    pub elements: Vec<ElementCue>,
}

/// Overlay anchored to the start of `from_scene` and the end of `to_scene`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayConfig {
    pub from_scene: String,
    pub to_scene: String,
    pub fade: u64,
    pub peak: f64,
}

impl PresentationConfig {
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ReelError::serde(format!("parse presentation JSON: {e}")))
    }

    pub fn from_reader(r: impl Read) -> ReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse presentation JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::configuration(format!(
                "open presentation JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReelError::serde(format!("serialize presentation JSON: {e}")))
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::configuration("canvas must be non-empty"));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        for scene in &self.scenes {
            ScriptedScene {
                id: scene.id.clone(),
                elements: scene.elements.clone(),
            }
            .validate()?;
        }
        Ok(())
    }

    /// Lay the scenes out end to end and attach the overlay.
    #[tracing::instrument(skip(self), fields(scenes = self.scenes.len()))]
    pub fn build_timeline(&self) -> ReelResult<Timeline<ScriptedScene>> {
        self.validate()?;
        let builder = self.scenes.iter().fold(
            TimelineBuilder::new(self.fps, self.transition).ease(self.ease),
            |b, scene| {
                b.scene(
                    scene.id.clone(),
                    scene.duration,
                    ScriptedScene {
                        id: scene.id.clone(),
                        elements: scene.elements.clone(),
                    },
                )
            },
        );
        let timeline = builder.build()?;
        match &self.overlay {
            None => Ok(timeline),
            Some(o) => {
                let overlay =
                    Overlay::spanning(&timeline, &o.from_scene, &o.to_scene, o.fade, o.peak)?;
                Ok(timeline.with_overlay(overlay))
            }
        }
    }

    /// The eight-scene promotional presentation: video intro, opening logo, five content
    /// slides and a closing logo, with a corner mark over the content slides.
    pub fn ledgerling() -> Self {
        let slide = |id: &str, duration: u64, elements: Vec<ElementCue>| SceneConfig {
            id: id.to_string(),
            duration,
            elements,
        };

        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            transition: TRANSITION_FRAMES,
            ease: Ease::STANDARD,
            scenes: vec![
                slide("video-intro", VIDEO_INTRO_FRAMES, vec![]),
                slide("logo-open", LOGO_FRAMES, logo_cues()),
                slide(
                    "building-blocks",
                    SLIDE_FRAMES,
                    [
                        cue("label", 8, 18, 12.0),
                        cue("title", 14, 28, 16.0),
                        cue("subtitle", 28, 22, 12.0),
                        cue("closing", 110, 22, 14.0),
                    ]
                    .into_iter()
                    .chain((0..4).map(|i| ElementCue {
                        id: format!("block-{i}"),
                        entrance: EntranceCue::Staggered {
                            index: i,
                            base_delay: 60,
                            stagger: 14,
                            duration: 18,
                        },
                    }))
                    .collect(),
                ),
                slide(
                    "the-problem",
                    SLIDE_FRAMES,
                    vec![
                        cue("label", 8, 18, 10.0),
                        cue("title", 18, 26, 14.0),
                        cue("pain-1", 52, 20, 10.0),
                        cue("pain-2", 88, 20, 10.0),
                        cue("pain-3", 124, 20, 10.0),
                        cue("solution-1", 68, 24, 12.0),
                        cue("solution-2", 104, 24, 12.0),
                        cue("solution-3", 140, 24, 12.0),
                        cue("hero-1", 178, 30, 16.0),
                        cue("hero-2", 194, 30, 16.0),
                    ],
                ),
                slide(
                    "the-vision",
                    LONG_SLIDE_FRAMES,
                    [
                        cue("label", 8, 18, 12.0),
                        cue("title", 14, 28, 16.0),
                        cue("center", 32, 26, 18.0),
                        cue("subtitle", 90, 22, 14.0),
                    ]
                    .into_iter()
                    .chain(stepped("pill", 6, 50, 10, 18, 10.0))
                    .collect(),
                ),
                slide(
                    "execution-model",
                    SLIDE_FRAMES,
                    [
                        cue("label", 8, 18, 12.0),
                        cue("title", 14, 28, 16.0),
                        cue("section-1", 44, 18, 12.0),
                        cue("section-2", 110, 18, 12.0),
                    ]
                    .into_iter()
                    .chain(stepped("step-1", 4, 54, 14, 18, 12.0))
                    .chain(stepped("step-2", 6, 124, 14, 18, 12.0))
                    .collect(),
                ),
                slide(
                    "live-demo",
                    LONG_SLIDE_FRAMES,
                    vec![
                        cue("label", 8, 18, 12.0),
                        cue("headline", 18, 28, 20.0),
                        cue("sub", 46, 22, 14.0),
                    ],
                ),
                slide("logo-close", LOGO_FRAMES, logo_cues()),
            ],
            overlay: Some(OverlayConfig {
                from_scene: "building-blocks".to_string(),
                to_scene: "live-demo".to_string(),
                fade: 20,
                peak: 0.55,
            }),
        }
    }
}

fn cue(id: &str, delay: u64, duration: u64, distance: f64) -> ElementCue {
    ElementCue {
        id: id.to_string(),
        entrance: EntranceCue::FadeSlide {
            delay,
            duration,
            distance,
        },
    }
}

/// `count` elements `{prefix}-{i}` entering `step` frames apart from `first`.
fn stepped(
    prefix: &str,
    count: usize,
    first: u64,
    step: u64,
    duration: u64,
    distance: f64,
) -> impl Iterator<Item = ElementCue> {
    let prefix = prefix.to_string();
    (0..count).map(move |i| {
        cue(
            &format!("{prefix}-{i}"),
            stagger_delay(i, first, step),
            duration,
            distance,
        )
    })
}

/// Mark fades in first; the wordmark rises in once it has settled.
fn logo_cues() -> Vec<ElementCue> {
    vec![cue("logo", 6, 20, 0.0), cue("wordmark", 36, 18, 28.0)]
}

#[cfg(test)]
#[path = "../../tests/unit/config/presentation.rs"]
mod tests;
