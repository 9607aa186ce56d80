//! DOM rendering for the four screens.
//!
//! Static screens (intro, question, celebration) are rebuilt from scratch when
//! the view state changes. The playing screen keeps a map of heart id to
//! button so each frame only moves existing nodes, adds new ones and removes
//! the ones that were caught or fell off; recreating nodes every frame would
//! swallow clicks that land between mousedown and mouseup.

use std::collections::HashMap;

use web_sys::{Document, Element};

use crate::error::{PageError, Result};
use crate::page::{ValentinePage, ViewState};
use crate::{CELEBRATION_GLYPH, QUESTION_RIBBON};

pub mod markup;

const ROOT_ID: &str = "vp-root";
const STYLE_ID: &str = "vp-style";

/// Handles into the playing screen.
struct PlayingNodes {
    score: Element,
    timer: Element,
    hearts: Element,
    popup: Element,
    heart_nodes: HashMap<u64, Element>,
}

/// Handles into the question screen.
struct QuestionNodes {
    no_button: Element,
    pleading: Element,
}

pub struct PageView {
    document: Document,
    root: Element,
    playing: Option<PlayingNodes>,
    question: Option<QuestionNodes>,
}

impl PageView {
    /// Create (or reuse) the stylesheet and the root container in `document`.
    pub fn mount(document: &Document) -> Result<Self> {
        let body = document.body().ok_or(PageError::NoBody)?;
        if document.get_element_by_id(STYLE_ID).is_none() {
            let style = document.create_element("style")?;
            style.set_id(STYLE_ID);
            style.set_text_content(Some(markup::STYLESHEET));
            body.append_child(&style)?;
        }
        let root = match document.get_element_by_id(ROOT_ID) {
            Some(el) => el,
            None => {
                let el = document.create_element("div")?;
                el.set_id(ROOT_ID);
                body.append_child(&el)?;
                el
            }
        };
        root.set_class_name("vp-root");
        Ok(Self {
            document: document.clone(),
            root,
            playing: None,
            question: None,
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Throw away the current screen and build the one for `page.view()`.
    pub fn render(&mut self, page: &ValentinePage) -> Result<()> {
        self.root.set_inner_html("");
        self.playing = None;
        self.question = None;
        match page.view() {
            ViewState::Intro => self.render_intro(page),
            ViewState::Playing => self.render_playing(page),
            ViewState::Question => self.render_question(page),
            ViewState::Yes => self.render_celebration(page),
        }
    }

    fn node(&self, parent: &Element, tag: &str, class: &str, text: Option<&str>) -> Result<Element> {
        let el = self.document.create_element(tag)?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        if text.is_some() {
            el.set_text_content(text);
        }
        parent.append_child(&el)?;
        Ok(el)
    }

    fn render_intro(&mut self, page: &ValentinePage) -> Result<()> {
        let screen = self.node(&self.root, "div", "vp-screen vp-center", None)?;
        let card = self.node(&screen, "div", "vp-card vp-pop", None)?;
        self.node(&card, "div", "vp-hero vp-bob", Some("🐱💕"))?;
        self.node(&card, "h1", "vp-title", Some("Ready to Play?"))?;
        let blurb = markup::intro_blurb(page.target_score());
        self.node(&card, "p", "vp-lead", Some(blurb.as_str()))?;
        let start = self.node(&card, "button", "vp-btn vp-btn-yes", Some("Start Game 🎮"))?;
        start.set_attribute("data-action", "start")?;
        Ok(())
    }

    fn render_playing(&mut self, page: &ValentinePage) -> Result<()> {
        let screen = self.node(&self.root, "div", "vp-screen", None)?;
        let hud = self.node(&screen, "div", "vp-hud", None)?;
        let score_pill = self.node(&hud, "div", "vp-pill", Some("💖 "))?;
        let score = self.node(&score_pill, "span", "", None)?;
        let timer_pill = self.node(&hud, "div", "vp-pill vp-timer", Some("⏱️ "))?;
        let timer = self.node(&timer_pill, "span", "", None)?;
        let hint = markup::instructions(page.target_score());
        self.node(&screen, "p", "vp-hint", Some(hint.as_str()))?;
        let hearts = self.node(&screen, "div", "vp-hearts", None)?;
        let popup = self.node(&screen, "div", "", None)?;
        self.playing = Some(PlayingNodes {
            score,
            timer,
            hearts,
            popup,
            heart_nodes: HashMap::new(),
        });
        self.update_hud(page);
        self.sync_hearts(page)
    }

    fn render_question(&mut self, page: &ValentinePage) -> Result<()> {
        let config = page.config();
        let screen = self.node(&self.root, "div", "vp-screen vp-center", None)?;
        let pleading = self.node(
            &screen,
            "div",
            "vp-pleading vp-hidden",
            Some(config.pleading_text.as_str()),
        )?;
        let card = self.node(&screen, "div", "vp-card vp-pop", None)?;
        self.node(&card, "div", "vp-trophy vp-wiggle", Some("🏆"))?;
        let caught = markup::caught_line(page.score());
        self.node(&card, "p", "vp-lead", Some(caught.as_str()))?;
        if let Some(name) = &config.recipient {
            let line = self.node(&card, "div", "vp-name", None)?;
            self.node(&line, "span", "vp-wiggle", Some(markup::framed(name, "💕").as_str()))?;
        }
        self.node(&card, "h1", "vp-title", Some("Will you be my Valentine? 💘"))?;
        self.node(&card, "div", "vp-sparkles", Some("✨ ✨ ✨ ✨ ✨"))?;

        let choices = self.node(&card, "div", "vp-choices", None)?;
        let yes = self.node(&choices, "button", "vp-btn vp-btn-yes vp-bounce", Some("Yes 💖 🐱"))?;
        yes.set_attribute("data-action", "yes")?;
        let no_button = self.node(&choices, "button", "vp-btn vp-btn-no", None)?;
        no_button.set_attribute("data-action", "no")?;

        let ribbon = self.node(&card, "div", "vp-ribbon", None)?;
        for (i, emoji) in QUESTION_RIBBON.iter().enumerate() {
            let span = self.node(&ribbon, "span", "", Some(*emoji))?;
            span.set_attribute("style", &markup::ribbon_style(i))?;
        }

        self.question = Some(QuestionNodes { no_button, pleading });
        self.update_refusal(page)
    }

    fn render_celebration(&mut self, page: &ValentinePage) -> Result<()> {
        let config = page.config();
        let screen = self.node(&self.root, "div", "vp-screen vp-center", None)?;
        for heart in page.celebration() {
            let float = self.node(&screen, "span", "vp-float", Some(CELEBRATION_GLYPH))?;
            float.set_attribute("style", &markup::celebration_style(heart))?;
        }
        let card = self.node(&screen, "div", "vp-card vp-pop", None)?;
        if let Some(name) = &config.recipient {
            let line = self.node(&card, "div", "vp-name", None)?;
            self.node(&line, "span", "vp-wiggle", Some(markup::framed(name, "💖").as_str()))?;
        }
        self.node(&card, "h1", "vp-title", Some("Yay! 💖"))?;
        self.node(&card, "p", "vp-lead", Some("You made this kitty so happy!"))?;
        self.node(&card, "p", "vp-lead", Some(markup::thank_you(&config.pet_name).as_str()))?;
        self.node(&card, "div", "vp-beat", Some("💗"))?;
        Ok(())
    }

    /// Refresh the score and timer pills. No-op off the playing screen.
    pub fn update_hud(&self, page: &ValentinePage) {
        if let Some(nodes) = &self.playing {
            let score = markup::scoreboard(page.score(), page.target_score());
            nodes.score.set_text_content(Some(score.as_str()));
            nodes.timer.set_text_content(Some(markup::timer(page.time_left()).as_str()));
        }
    }

    /// Bring the heart buttons in line with the live hearts.
    pub fn sync_hearts(&mut self, page: &ValentinePage) -> Result<()> {
        let Some(nodes) = self.playing.as_mut() else {
            return Ok(());
        };
        let live = page.hearts();
        nodes.heart_nodes.retain(|id, el| {
            let alive = live.iter().any(|h| h.id == *id);
            if !alive {
                el.remove();
            }
            alive
        });
        for heart in live {
            let style = markup::heart_style(heart);
            if let Some(el) = nodes.heart_nodes.get(&heart.id) {
                el.set_attribute("style", &style)?;
                continue;
            }
            let el = self.document.create_element("button")?;
            el.set_class_name("vp-heart");
            el.set_text_content(Some(heart.glyph));
            el.set_attribute("data-heart-id", &heart.id.to_string())?;
            el.set_attribute("style", &style)?;
            nodes.hearts.append_child(&el)?;
            nodes.heart_nodes.insert(heart.id, el);
        }
        Ok(())
    }

    /// Show a fresh "+1" that rises and fades.
    pub fn pop_score(&self) -> Result<()> {
        let Some(nodes) = &self.playing else {
            return Ok(());
        };
        nodes.popup.set_inner_html("");
        self.node(&nodes.popup, "div", "vp-popup", Some("+1 💕"))?;
        Ok(())
    }

    /// Move and relabel the "No" button and toggle the pleading overlay.
    pub fn update_refusal(&self, page: &ValentinePage) -> Result<()> {
        let Some(nodes) = &self.question else {
            return Ok(());
        };
        let button = page.refusal();
        nodes.no_button.set_text_content(Some(button.label()));
        nodes
            .no_button
            .set_attribute("style", &markup::refusal_style(button))?;
        nodes.pleading.set_class_name(if page.pleading_visible() {
            "vp-pleading"
        } else {
            "vp-pleading vp-hidden"
        });
        Ok(())
    }
}
