//! Wiring the option derivation engine into the selection engine.

use std::cell::RefCell;
use std::rc::Rc;

use selkit_core::{Select, SelectBuilder, Source};
use selkit_options::{DerivedOption, Options, OptionsBuilder, SelectItem};
use selkit_runtime::{AsyncOptions, BindingScope};

/// A select over derived options whose values are the raw items.
pub type OptionSelect<T> = Select<DerivedOption<T>, T>;

/// Start a select whose option list is `options` re-derived for each query.
///
/// Picking an option stores its raw value; options the derivation marked
/// disabled cannot be picked.
///
/// ```
/// use selkit::prelude::*;
///
/// let options = OptionsBuilder::new(vec!["apple".to_owned(), "pear".to_owned()]).build();
/// let mut select = select_from_options(options).build()?;
/// select.set_input_value("pea");
/// assert_eq!(select.options().len(), 1);
/// let _ = select.handle_key(SelectKey::Commit);
/// assert_eq!(select.value(), SelectValue::single("pear".to_owned()));
/// # Ok::<(), SelectError>(())
/// ```
pub fn select_from_options<T>(options: Options<T>) -> SelectBuilder<DerivedOption<T>, T>
where
    T: SelectItem + 'static,
{
    let options = Rc::new(options);
    let source = {
        let options = Rc::clone(&options);
        Source::dynamic(move |input: &str| options.options(input))
    };
    let to_value = {
        let options = Rc::clone(&options);
        move |option: &DerivedOption<T>| options.option_to_value(option)
    };
    Select::builder_with(source, to_value)
        .is_option_disabled(move |option| options.is_option_disabled(option))
}

/// Start a select fed by `remote`.
///
/// Query text is forwarded to the adapter, and the latest fetched list runs
/// through the derivation configured by `configure` (fuzzy filtering is
/// switched off since the fetcher already filtered). Pass the built select
/// to [`follow_async`] so landed fetches reach its option list.
///
/// The builder's `on_input` callback is taken by the forwarding; replacing
/// it disconnects the adapter.
pub fn select_from_async<T>(
    remote: Rc<AsyncOptions<T>>,
    configure: impl FnOnce(OptionsBuilder<T>) -> OptionsBuilder<T>,
) -> SelectBuilder<DerivedOption<T>, T>
where
    T: SelectItem + PartialEq + 'static,
{
    let fetched = remote.options().clone();
    let base = OptionsBuilder::dynamic(move |_: &str| fetched.get())
        .filterable(selkit_options::Filterable::Off);
    let options = configure(base).build();
    select_from_options(options).on_input(move |text| {
        tracing::trace!(input = text, "forwarding query to async options");
        remote.on_input(text);
    })
}

/// Recompute `select`'s options whenever `remote` lands a new list.
///
/// The returned scope owns the subscription; drop it when the select is
/// unmounted. The scope holds the select weakly.
#[must_use = "dropping the scope stops option refreshes"]
pub fn follow_async<T>(
    select: &Rc<RefCell<OptionSelect<T>>>,
    remote: &AsyncOptions<T>,
) -> BindingScope
where
    T: SelectItem + PartialEq + 'static,
{
    let target = Rc::downgrade(select);
    let mut scope = BindingScope::new();
    scope.subscribe(remote.options(), move |list: &Vec<T>| {
        if let Some(select) = target.upgrade() {
            tracing::trace!(count = list.len(), "async options landed");
            select.borrow_mut().refresh_options();
        }
    });
    scope
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use selkit_core::{SelectKey, SelectValue};
    use selkit_options::Createable;
    use selkit_runtime::DEFAULT_THROTTLE;
    use tokio::task::LocalSet;
    use tracing_test::traced_test;

    use super::*;

    fn fruit() -> Vec<String> {
        ["apple", "banana", "pear", "pineapple", "kiwi"]
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn options_follow_input() {
        let options = OptionsBuilder::new(fruit()).build();
        let mut select = select_from_options(options).build().unwrap();
        assert_eq!(select.options().len(), 5);

        select.set_input_value("pea");
        let texts: Vec<_> = select.options().iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, vec!["pear", "pineapple"]);
        assert_eq!(select.focused_index(), Some(0));
    }

    #[test]
    fn picking_stores_raw_value() {
        let options = OptionsBuilder::new(fruit()).build();
        let mut select = select_from_options(options)
            .multiple(true)
            .build()
            .unwrap();
        select.set_input_value("kiw");
        let _ = select.handle_key(SelectKey::Commit);
        assert_eq!(
            select.value(),
            SelectValue::multiple(vec!["kiwi".to_owned()])
        );
        assert_eq!(select.input_value(), "");
        assert_eq!(select.options().len(), 5);
    }

    #[test]
    fn disabled_derivations_block_picks() {
        let options = OptionsBuilder::new(fruit())
            .disable(|f| f == "pear")
            .build();
        let mut select = select_from_options(options).build().unwrap();
        select.set_input_value("pear");
        let _ = select.handle_key(SelectKey::Commit);
        assert!(!select.has_value());
    }

    #[test]
    fn created_entry_picks_typed_value() {
        let options = OptionsBuilder::new(fruit())
            .createable(Createable::FromInput)
            .build();
        let mut select = select_from_options(options).build().unwrap();
        select.set_input_value("mango ");
        let last = select.options().last().cloned().unwrap();
        assert!(last.created);
        assert_eq!(last.label.to_string(), "Create mango");
        select.pick_option(&last);
        assert_eq!(select.value(), SelectValue::single("mango".to_owned()));
    }

    #[traced_test]
    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn typed_text_reaches_the_fetcher() {
        let local = LocalSet::new();
        local
            .run_until(async {
                let remote = Rc::new(AsyncOptions::new(|query: String| async move {
                    Ok::<_, String>(vec![format!("{query}ricot")])
                }));
                let select = Rc::new(RefCell::new(
                    select_from_async(Rc::clone(&remote), |builder| builder)
                        .build()
                        .unwrap(),
                ));
                let scope = follow_async(&select, &remote);
                assert_eq!(scope.len(), 1);

                select.borrow_mut().set_input_value("ap");
                tokio::time::sleep(DEFAULT_THROTTLE + Duration::from_millis(10)).await;

                let texts: Vec<_> = select
                    .borrow()
                    .options()
                    .iter()
                    .map(|o| o.text.clone())
                    .collect();
                assert_eq!(texts, vec!["apricot".to_owned()]);

                drop(scope);
                select.borrow_mut().set_input_value("fi");
                tokio::time::sleep(DEFAULT_THROTTLE + Duration::from_millis(10)).await;
                assert_eq!(remote.options().get(), vec!["firicot".to_owned()]);
                assert_eq!(select.borrow().options()[0].text, "apricot");
            })
            .await;
        assert!(logs_contain("forwarding query to async options"));
        assert!(logs_contain("async options landed"));
    }
}
