use super::*;
use crate::native::{HeadlessBackend, NativeView};
use crate::resource::StaticBundle;

fn layout() -> TabBarLayout {
    TabBarLayout::new(Arc::new(StaticBundle::new(vec!["checkmark"])))
}

fn tab(name: &str, meta: Meta) -> Candidate<NativeView> {
    Candidate {
        view: Some(NativeView::plain(name)),
        meta: Some(meta),
    }
}

fn typed_tab(name: &str) -> Candidate<NativeView> {
    tab(name, Meta::typed(TabConfig::new(name, "checkmark")))
}

#[test]
fn selection_honors_valid_indices_only() {
    assert_eq!(TabBarConfig::default().selection(3), 0);
    assert_eq!(TabBarConfig::selecting(1).selection(3), 1);
    assert_eq!(TabBarConfig::selecting(2).selection(3), 2);
    assert_eq!(TabBarConfig::selecting(3).selection(3), 0);
    assert_eq!(TabBarConfig::selecting(-1).selection(3), 0);
    assert_eq!(TabBarConfig::selecting(i64::MAX).selection(3), 0);
}

#[test]
fn tab_config_decodes_from_map() {
    let meta = Meta::map(vec![("title", "Home"), ("icon_name", "house"), ("badge", "1")]);
    let config: TabConfig = meta.decode().unwrap();
    assert_eq!(config.title, "Home");
    assert_eq!(config.icon_name, "house");
    assert!(config.bundle.is_none());
}

#[test]
fn tab_config_requires_both_keys() {
    assert!(Meta::map(vec![("title", "Home")])
        .decode::<TabConfig>()
        .is_err());
    assert!(Meta::map(vec![("icon_name", "house")])
        .decode::<TabConfig>()
        .is_err());
    assert!(crate::meta::decode::<TabConfig>(None).is_err());
}

#[test]
fn tab_bar_config_decodes_from_map() {
    let config: TabBarConfig = Meta::map(vec![("selected_index", 2)]).decode().unwrap();
    assert_eq!(config, TabBarConfig::selecting(2));

    let config: TabBarConfig = Meta::map(vec![("foo", "bar")]).decode().unwrap();
    assert_eq!(config, TabBarConfig::default());
}

#[test]
fn builds_tabs_with_titles_and_icons() {
    let children = vec![
        typed_tab("first"),
        tab(
            "second",
            Meta::map(vec![("title", "Second"), ("icon_name", "missing")]),
        ),
    ];
    let view = layout().layout(&HeadlessBackend, children, None).unwrap();

    let items = view.tab_items().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "first");
    assert_eq!(items[0].icon.as_ref().map(Icon::name), Some("checkmark"));
    assert_eq!(items[0].view.name(), Some("first"));
    // unknown icons don't drop the tab
    assert_eq!(items[1].title, "Second");
    assert_eq!(items[1].icon, None);
}

#[test]
fn typed_config_bundle_overrides_default_bundle() {
    let bundle: Arc<dyn ResourceBundle> = Arc::new(StaticBundle::new(vec!["moon"]));
    let config = TabConfig::new("night", "moon").with_bundle(bundle);
    let view = layout()
        .layout(&HeadlessBackend, vec![tab("night", Meta::typed(config))], None)
        .unwrap();

    let item = view.selected_item().unwrap();
    assert_eq!(item.icon, Some(Icon::named("moon")));
}

#[test]
fn selection_is_checked_against_surviving_tabs() {
    let children = vec![
        typed_tab("a"),
        Candidate {
            view: None,
            meta: Some(Meta::typed(TabConfig::new("gone", "checkmark"))),
        },
        tab("b", Meta::map(vec![("title", "no icon")])),
        typed_tab("c"),
    ];
    // index 2 exists in the input but not among the two surviving tabs
    let meta = Meta::typed(TabBarConfig::selecting(2));
    let view = layout()
        .layout(&HeadlessBackend, children, Some(&meta))
        .unwrap();
    assert_eq!(view.tab_count(), Some(2));
    assert_eq!(view.selected_index(), Some(0));
}

#[test]
fn no_surviving_tabs_is_absent() {
    let children = vec![Candidate {
        view: Some(NativeView::plain("unconfigured")),
        meta: None,
    }];
    assert!(layout()
        .layout(&HeadlessBackend, children, None)
        .is_none());
    assert!(layout()
        .layout(&HeadlessBackend, Vec::new(), None)
        .is_none());
}
