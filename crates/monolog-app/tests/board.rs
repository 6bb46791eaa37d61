use jiff::tz::TimeZone;

use monolog_app::board::{INPUT_PLACEHOLDER, PostBoard};
use monolog_core::store::PostStore;
use monolog_storage::kv::MemoryStore;
use monolog_storage::posts::LocalPostRepository;

fn board(store: &MemoryStore) -> PostBoard<LocalPostRepository<&MemoryStore>> {
    let at: jiff::Timestamp = "2025-01-02T03:04:05Z".parse().unwrap();
    PostBoard::new(PostStore::load(LocalPostRepository::new(store)).with_clock(move || at))
}

#[test]
fn submit_posts_and_clears_input() {
    let store = MemoryStore::new();
    let mut board = board(&store);

    board.set_input("hello there");
    let post = board.submit().unwrap().unwrap();

    assert_eq!(post.text, "hello there");
    assert_eq!(board.input(), "");
    assert_eq!(board.store().len(), 1);
}

#[test]
fn blank_submit_keeps_list_and_input() {
    let store = MemoryStore::new();
    let mut board = board(&store);

    board.set_input("   ");
    assert!(board.submit().unwrap().is_none());

    assert_eq!(board.input(), "   ");
    assert!(board.store().is_empty());
}

#[test]
fn headline_follows_latest_post() {
    let store = MemoryStore::new();
    let mut board = board(&store);
    assert_eq!(board.headline(), None);

    board.set_input("first");
    board.submit().unwrap();
    board.set_input("second");
    let second = board.submit().unwrap().unwrap();
    assert_eq!(board.headline(), Some("second"));

    board.delete(second.id).unwrap();
    assert_eq!(board.headline(), Some("first"));
}

#[test]
fn render_lists_posts_with_timestamps_and_stats() {
    let store = MemoryStore::new();
    let mut board = board(&store);
    board.set_input("ab");
    board.submit().unwrap();
    board.set_input("abcd");
    board.submit().unwrap();

    let page = board.render_in(&TimeZone::UTC);

    assert!(page.contains(INPUT_PLACEHOLDER));
    assert!(page.contains("#0 ab"));
    assert!(page.contains("#1 abcd"));
    assert!(page.contains("2025/01/02 03:04:05  [delete #1]"));
    assert!(page.contains("posts: 2  average length: 3.0"));
    assert!(page.find("#0 ab").unwrap() < page.find("#1 abcd").unwrap());
}

#[test]
fn posts_survive_a_new_board_on_the_same_storage() {
    let store = MemoryStore::new();
    {
        let mut board = board(&store);
        board.set_input("persisted");
        board.submit().unwrap();
    }

    let board = board(&store);
    assert_eq!(board.headline(), Some("persisted"));
}
