use std::fmt::Write as _;

use jiff::tz::TimeZone;

use monolog_core::error::CoreError;
use monolog_core::models::post::Post;
use monolog_core::repository::PostRepository;
use monolog_core::store::PostStore;

pub const INPUT_PLACEHOLDER: &str = "What's on your mind?";
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// The monologue form and list. All list changes go through the store.
pub struct PostBoard<R> {
    store: PostStore<R>,
    input: String,
}

impl<R: PostRepository> PostBoard<R> {
    pub fn new(store: PostStore<R>) -> Self {
        Self {
            store,
            input: String::new(),
        }
    }

    pub fn store(&self) -> &PostStore<R> {
        &self.store
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Post the current input. Blank input is ignored and kept as is; a
    /// successful post clears the input.
    pub fn submit(&mut self) -> Result<Option<Post>, CoreError> {
        let added = self.store.add_post(&self.input);
        if let Ok(Some(_)) = &added {
            self.input.clear();
        }
        added
    }

    pub fn delete(&mut self, id: u64) -> Result<bool, CoreError> {
        self.store.delete_post(id)
    }

    /// The latest post, shown as today's monologue.
    pub fn headline(&self) -> Option<&str> {
        self.store.latest().map(|p| p.text.as_str())
    }

    pub fn render(&self) -> String {
        self.render_in(&TimeZone::system())
    }

    /// Render with timestamps shown in `tz`.
    pub fn render_in(&self, tz: &TimeZone) -> String {
        let mut out = String::new();

        if let Some(headline) = self.headline() {
            let _ = writeln!(out, "Today's monologue: {headline}\n");
        }

        let input = if self.input.is_empty() {
            INPUT_PLACEHOLDER
        } else {
            self.input.as_str()
        };
        let _ = writeln!(out, "> {input}  [Post]\n");

        for post in self.store.posts() {
            let when = post.timestamp.to_zoned(tz.clone());
            let _ = writeln!(out, "#{} {}", post.id, post.text);
            let _ = writeln!(
                out,
                "    {}  [delete #{}]",
                when.strftime(TIMESTAMP_FORMAT),
                post.id
            );
        }

        let stats = self.store.stats();
        let _ = writeln!(
            out,
            "\nposts: {}  average length: {:.1}",
            stats.count, stats.average_length
        );
        out
    }
}
