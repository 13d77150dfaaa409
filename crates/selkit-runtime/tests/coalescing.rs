//! Trailing-edge throttling of async option fetches.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use selkit_runtime::{AsyncOptions, DEFAULT_THROTTLE};
use tokio::task::LocalSet;
use tokio::time::sleep;

fn fruit_fetcher(
    calls: Rc<RefCell<Vec<String>>>,
) -> impl Fn(String) -> std::future::Ready<Result<Vec<String>, String>> + 'static {
    move |query: String| {
        calls.borrow_mut().push(query.clone());
        let found = ["apple", "apricot", "banana"]
            .into_iter()
            .filter(|fruit| fruit.starts_with(query.as_str()))
            .map(str::to_owned)
            .collect();
        std::future::ready(Ok(found))
    }
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn rapid_keystrokes_collapse_to_last_text() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let calls = Rc::new(RefCell::new(Vec::new()));
            let remote = AsyncOptions::new(fruit_fetcher(Rc::clone(&calls)));

            remote.on_input("a");
            sleep(Duration::from_millis(40)).await;
            remote.on_input("ap");
            sleep(Duration::from_millis(40)).await;
            remote.on_input("app");
            assert!(calls.borrow().is_empty());

            sleep(DEFAULT_THROTTLE).await;
            assert_eq!(*calls.borrow(), vec!["app".to_owned()]);
            assert_eq!(remote.options().get(), vec!["apple".to_owned()]);
            assert!(!remote.loading().get());
        })
        .await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn subscribers_see_each_landed_list() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let calls = Rc::new(RefCell::new(Vec::new()));
            let remote = AsyncOptions::new(fruit_fetcher(calls));
            let seen = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&seen);
            let _sub = remote
                .options()
                .subscribe(move |list| sink.borrow_mut().push(list.len()));

            remote.on_input("a");
            sleep(Duration::from_millis(300)).await;
            remote.on_input("b");
            sleep(Duration::from_millis(300)).await;
            assert_eq!(*seen.borrow(), vec![2, 1]);
        })
        .await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn custom_throttle_window() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let calls = Rc::new(RefCell::new(Vec::new()));
            let remote =
                AsyncOptions::with_throttle(fruit_fetcher(Rc::clone(&calls)), Duration::ZERO);
            assert_eq!(remote.throttle(), Duration::ZERO);
            remote.on_input("ban");
            sleep(Duration::from_millis(1)).await;
            assert_eq!(remote.options().get(), vec!["banana".to_owned()]);
        })
        .await;
}
