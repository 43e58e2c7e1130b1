use clusterkit::{
    HeadlessBackend, Meta, NativeView, Node, Resolver, StaticBundle, TabBarConfig, TabBarLayout,
    TabConfig,
};
use std::sync::Arc;

fn resolver() -> Resolver<HeadlessBackend> {
    Resolver::standard(HeadlessBackend, Arc::new(StaticBundle::new(vec!["checkmark"])))
}

fn simple(name: &'static str, meta: Option<Meta>) -> Node<NativeView> {
    Node::leaf(move |_| Some(NativeView::plain(name)), meta)
}

fn tab(title: &'static str) -> Node<NativeView> {
    simple(title, Some(Meta::typed(TabConfig::new(title, "checkmark"))))
}

fn three_tabs() -> Vec<Node<NativeView>> {
    vec![tab("test1"), tab("test2"), tab("test3")]
}

fn tab_bar(children: Vec<Node<NativeView>>, meta: Option<Meta>) -> Option<NativeView> {
    resolver()
        .resolve(&Node::cluster(TabBarLayout::ID, children, meta))
        .unwrap()
}

fn titles(view: &NativeView) -> Vec<&str> {
    view.tab_items()
        .unwrap()
        .iter()
        .map(|item| item.title.as_str())
        .collect()
}

#[test]
fn displays_its_children() {
    let view = tab_bar(vec![tab("test1")], None).unwrap();
    assert_eq!(view.tab_count(), Some(1));
    assert_eq!(titles(&view), vec!["test1"]);
}

#[test]
fn configures_the_tab_bar() {
    let view = tab_bar(three_tabs(), None).unwrap();
    assert_eq!(titles(&view), vec!["test1", "test2", "test3"]);
    assert_eq!(view.selected_index(), Some(0));
    for item in view.tab_items().unwrap() {
        assert_eq!(item.view.name(), Some(item.title.as_str()));
        assert!(item.icon.is_some());
    }
}

#[test]
fn selects_the_requested_tab() {
    let meta = Meta::typed(TabBarConfig::selecting(1));
    let view = tab_bar(three_tabs(), Some(meta)).unwrap();
    assert_eq!(view.tab_count(), Some(3));
    assert_eq!(view.selected_index(), Some(1));
    assert_eq!(view.selected_item().unwrap().title, "test2");
}

#[test]
fn ignores_out_of_bounds_selection() {
    let meta = Meta::typed(TabBarConfig::selecting(3));
    let view = tab_bar(three_tabs(), Some(meta)).unwrap();
    assert_eq!(view.tab_count(), Some(3));
    assert_eq!(view.selected_index(), Some(0));
}

#[test]
fn ignores_negative_selection() {
    let meta = Meta::typed(TabBarConfig::selecting(-1));
    let view = tab_bar(three_tabs(), Some(meta)).unwrap();
    assert_eq!(view.tab_count(), Some(3));
    assert_eq!(view.selected_index(), Some(0));
}

#[test]
fn loads_selection_from_a_map() {
    let meta = Meta::map(vec![("selected_index", 1)]);
    let view = tab_bar(three_tabs(), Some(meta)).unwrap();
    assert_eq!(view.selected_index(), Some(1));
}

#[test]
fn ignores_maps_without_a_selection() {
    let meta = Meta::map(vec![("foo", "bar")]);
    let view = tab_bar(three_tabs(), Some(meta)).unwrap();
    assert_eq!(view.tab_count(), Some(3));
    assert_eq!(view.selected_index(), Some(0));
}

#[test]
fn ignores_children_without_view() {
    let children = vec![
        Node::leaf(|_| None, Some(Meta::typed(TabConfig::new("_", "checkmark")))),
        tab("test1"),
    ];
    let view = tab_bar(children, None).unwrap();
    assert_eq!(titles(&view), vec!["test1"]);
}

#[test]
fn children_without_view_do_not_count_for_selection() {
    let children = vec![
        Node::leaf(|_| None, Some(Meta::typed(TabConfig::new("_", "checkmark")))),
        tab("test1"),
        tab("test2"),
    ];
    let meta = Meta::typed(TabBarConfig::selecting(2));
    let view = tab_bar(children, Some(meta)).unwrap();
    assert_eq!(view.tab_count(), Some(2));
    assert_eq!(view.selected_index(), Some(0));
}

#[test]
fn ignores_children_without_config() {
    let view = tab_bar(vec![simple("plain", None), tab("foo")], None).unwrap();
    assert_eq!(titles(&view), vec!["foo"]);
}

#[test]
fn uses_config_defined_as_maps() {
    let children = vec![
        simple(
            "test",
            Some(Meta::map(vec![("title", "test"), ("icon_name", "checkmark")])),
        ),
        tab("foo"),
    ];
    let view = tab_bar(children, None).unwrap();
    assert_eq!(titles(&view), vec!["test", "foo"]);
    let first = &view.tab_items().unwrap()[0];
    assert_eq!(first.icon.as_ref().map(|icon| icon.name()), Some("checkmark"));
}

#[test]
fn drops_map_config_missing_the_title() {
    let children = vec![simple("x", Some(Meta::map(vec![("icon_name", "_")]))), tab("foo")];
    let view = tab_bar(children, None).unwrap();
    assert_eq!(titles(&view), vec!["foo"]);
}

#[test]
fn drops_map_config_missing_the_icon_name() {
    let children = vec![simple("x", Some(Meta::map(vec![("title", "_")]))), tab("foo")];
    let view = tab_bar(children, None).unwrap();
    assert_eq!(titles(&view), vec!["foo"]);
}

#[test]
fn resolves_to_nothing_without_usable_children() {
    let children = vec![
        simple("unconfigured", None),
        Node::leaf(|_| None, Some(Meta::typed(TabConfig::new("_", "checkmark")))),
    ];
    assert!(tab_bar(children, None).is_none());
    assert!(tab_bar(Vec::new(), None).is_none());
}
