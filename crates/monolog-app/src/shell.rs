use monolog_core::repository::PostRepository;

use crate::api::ProfileApi;
use crate::board::PostBoard;
use crate::profile::ProfileView;
use crate::routes::{self, View};

pub const HEADER: &str = "User Profile";

/// Static header plus whichever view the current path selects.
pub struct Shell<A, R> {
    pub profile: ProfileView<A>,
    pub board: PostBoard<R>,
}

impl<A: ProfileApi, R: PostRepository> Shell<A, R> {
    pub fn new(profile: ProfileView<A>, board: PostBoard<R>) -> Self {
        Self { profile, board }
    }

    /// Render the page at `path`. The profile view is mounted the first
    /// time it is shown.
    pub async fn render(&mut self, path: &str) -> String {
        let body = match routes::resolve(path) {
            Some(View::Profile) => {
                self.profile.mount().await;
                self.profile.render()
            }
            Some(View::Monologue) => self.board.render(),
            None => format!("Not found: {}\n", routes::normalize(path)),
        };

        format!("{}\n{}", render_header(path), body)
    }
}

/// `User Profile` and the nav bar, with the active link in brackets.
pub fn render_header(path: &str) -> String {
    let links: Vec<String> = routes::nav_links(path)
        .into_iter()
        .map(|link| {
            if link.active {
                format!("[{}]", link.label)
            } else {
                link.label.to_string()
            }
        })
        .collect();

    format!("{HEADER}\n{}\n", links.join(" | "))
}
