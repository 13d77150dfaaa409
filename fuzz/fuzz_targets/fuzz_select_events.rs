#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use selkit::select_from_options;
use selkit_core::{SelectKey, SurfaceId, SurfaceRole};
use selkit_options::{Createable, OptionsBuilder};

#[derive(Debug, Arbitrary)]
enum Event {
    Type(String),
    Key(u8),
    Open,
    Close,
    Pick(u8),
    Focus(Option<u8>),
    FocusOut(Option<u8>),
    Click(u8),
    Disable(bool),
}

const KEYS: [SelectKey; 7] = [
    SelectKey::Next,
    SelectKey::Previous,
    SelectKey::Commit,
    SelectKey::Dismiss,
    SelectKey::DeleteBackward,
    SelectKey::Space,
    SelectKey::Tab,
];

fuzz_target!(|input: (bool, Vec<Event>)| {
    let (multiple, events) = input;
    let source: Vec<String> = ["apple", "banana", "pear", "pineapple", "kiwi"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    let options = OptionsBuilder::new(source)
        .createable(Createable::FromInput)
        .build();
    let Ok(mut select) = select_from_options(options).multiple(multiple).build() else {
        return;
    };
    for (raw, role) in [
        (1, SurfaceRole::Container),
        (2, SurfaceRole::Input),
        (3, SurfaceRole::List),
    ] {
        select.register_surface(SurfaceId::from_raw(raw), role);
    }

    for event in events.into_iter().take(256) {
        match event {
            Event::Type(text) => select.set_input_value(text),
            Event::Key(k) => {
                let _ = select.handle_key(KEYS[usize::from(k) % KEYS.len()]);
            }
            Event::Open => select.open(),
            Event::Close => select.close(),
            Event::Pick(i) => {
                if let Some(option) = select.options().get(usize::from(i)).cloned() {
                    select.pick_option(&option);
                }
            }
            Event::Focus(i) => select.set_focused_index(i.map(usize::from)),
            Event::FocusOut(target) => {
                let _ = select.focus_out(target.map(|t| SurfaceId::from_raw(u64::from(t))));
            }
            Event::Click(target) => {
                let _ = select.click(SurfaceId::from_raw(u64::from(target)));
            }
            Event::Disable(disabled) => select.set_disabled(disabled),
        }

        if let Some(index) = select.focused_index() {
            assert!(index < select.options().len());
        }
        if !select.is_open() {
            assert_eq!(select.focused_index(), None);
            assert!(select.input_value().is_empty());
        }
        if select.is_disabled() {
            assert!(!select.is_open());
        }
        if !multiple {
            assert!(select.values().len() <= 1);
        }
    }
});
