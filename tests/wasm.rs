use futures::future::FutureExt;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use nvr_shell::error::PageLoadError;
use nvr_shell::pages::{builtin_loader, LoadState, PageId, PageLoader, PageModule};
use nvr_shell::theme::ThemeMode;
use nvr_shell::toast::{ToastKind, ToastQueue};
use nvr_shell::AppShell;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, Node};

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

/// Lets the router, effects and resolved suspensions run.
async fn settle() {
	TimeoutFuture::new(100).await;
}

/// Mounts the application at `path` into a fresh element. Dropping the handle unmounts it.
fn mount_at(path: &str, loader: PageLoader<PageModule>) -> (impl Sized, HtmlElement) {
	window()
		.history()
		.unwrap()
		.replace_state_with_url(&JsValue::NULL, "", Some(path))
		.unwrap();
	let root: HtmlElement = document().create_element("div").unwrap().unchecked_into();
	document().body().unwrap().append_child(&root).unwrap();
	let handle = leptos::mount::mount_to(root.clone(), move || view! { <AppShell loader/> });
	(handle, root)
}

fn unmount(handle: impl Sized, root: HtmlElement) {
	drop(handle);
	root.remove();
}

fn count(root: &HtmlElement, selector: &str) -> u32 {
	root.query_selector_all(selector).unwrap().length()
}

fn text(root: &HtmlElement, selector: &str) -> String {
	root.query_selector(selector)
		.unwrap()
		.and_then(|element| element.text_content())
		.unwrap_or_default()
}

fn node(root: &HtmlElement, selector: &str) -> Node {
	root.query_selector(selector)
		.unwrap()
		.unwrap_or_else(|| panic!("no element matches {selector}"))
		.into()
}

fn failing_loader() -> PageLoader<PageModule> {
	PageLoader::new(|page| async move { Err(PageLoadError::new(page, "offline")) }.boxed_local())
}

#[wasm_bindgen_test]
fn theme_and_toasts() {
	assert_eq!(ThemeMode::from_prefers_dark(true).to_string(), "dark");

	let mut queue = ToastQueue::default();
	let id = queue.push(ToastKind::Error, "camera offline");
	assert_eq!(queue.advance(Duration::from_millis(5000)), vec![id]);
}

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/asynchronous-tests.html
#[wasm_bindgen_test(async)]
async fn builtin_pages_resolve() {
	let loader = builtin_loader();
	assert_eq!(loader.state(PageId::Entities), LoadState::Idle);
	assert!(loader.resolve(PageId::Entities).await.is_ok());
	assert_eq!(loader.state(PageId::Entities), LoadState::Ready);
}

#[wasm_bindgen_test(async)]
async fn each_declared_path_renders_one_page() {
	for (path, class) in [
		("/", "Cameras"),
		("/recordings", "Recordings"),
		("/recordings/cam-1", "CameraRecordings"),
		("/recordings/cam-1/2024-03-01", "CameraRecordingsDaily"),
		("/configuration", "Configuration"),
		("/entities", "Entities"),
	] {
		let (handle, root) = mount_at(path, builtin_loader());
		settle().await;
		assert_eq!(count(&root, ".Page"), 1, "{path}");
		assert_eq!(count(&root, &format!(".Page.{class}")), 1, "{path}");
		assert_eq!(count(&root, ".NotFound"), 0, "{path}");
		unmount(handle, root);
	}
}

#[wasm_bindgen_test(async)]
async fn daily_page_shows_its_parameters() {
	let (handle, root) = mount_at("/recordings/cam-1/2024-03-01", builtin_loader());
	settle().await;
	assert_eq!(text(&root, ".CameraRecordingsDaily h1"), "cam-1");
	assert_eq!(text(&root, ".CameraRecordingsDaily h2"), "2024-03-01");
	unmount(handle, root);
}

#[wasm_bindgen_test(async)]
async fn undeclared_path_renders_not_found() {
	let (handle, root) = mount_at("/nowhere", builtin_loader());
	settle().await;
	assert_eq!(count(&root, ".NotFound"), 1);
	assert_eq!(count(&root, ".Page"), 0);
	unmount(handle, root);
}

#[wasm_bindgen_test(async)]
async fn legacy_cameras_path_replaces_history_entry() {
	let history = window().history().unwrap();
	let entries = history.length().unwrap();
	let (handle, root) = mount_at("/cameras", builtin_loader());
	settle().await;
	assert_eq!(window().location().pathname().unwrap(), "/");
	assert_eq!(history.length().unwrap(), entries);
	assert_eq!(count(&root, ".Page.Cameras"), 1);
	unmount(handle, root);
}

#[wasm_bindgen_test(async)]
async fn footer_hidden_only_on_configuration() {
	for (path, footers) in [("/configuration", 0), ("/entities", 1), ("/configuration/", 1)] {
		let (handle, root) = mount_at(path, builtin_loader());
		settle().await;
		assert_eq!(count(&root, ".Footer"), footers, "{path}");
		unmount(handle, root);
	}
}

#[wasm_bindgen_test(async)]
async fn shell_renders_in_order() {
	let (handle, root) = mount_at("/entities", builtin_loader());
	settle().await;

	let follows = |first: &Node, second: &Node| {
		first.compare_document_position(second) & Node::DOCUMENT_POSITION_FOLLOWING != 0
	};
	let header = node(&root, ".Header");
	let toasts = node(&root, ".ToastHost");
	let page = node(&root, ".Page");
	assert!(follows(&header, &toasts));
	assert!(follows(&toasts, &page));

	let outer = root.first_element_child().unwrap();
	let fab = outer.last_element_child().unwrap();
	assert!(fab.class_list().contains("ScrollToTopFab"));
	let footer = root.query_selector(".Footer").unwrap().unwrap();
	assert!(footer.next_element_sibling().unwrap().is_same_node(Some(fab.as_ref())));
	assert!(follows(&page, &footer));
	unmount(handle, root);
}

#[wasm_bindgen_test(async)]
async fn pending_page_shows_loading() {
	let loader = PageLoader::new(|_| futures::future::pending().boxed_local());
	let (handle, root) = mount_at("/recordings", loader);
	settle().await;
	assert_eq!(count(&root, ".Loading"), 1);
	assert!(text(&root, ".Loading").contains("Loading"));
	assert_eq!(count(&root, ".Page"), 0);
	assert_eq!(count(&root, ".Header"), 1);
	unmount(handle, root);
}

#[wasm_bindgen_test(async)]
async fn failed_page_shows_errors_and_toast() {
	let (handle, root) = mount_at("/entities", failing_loader());
	settle().await;
	assert_eq!(count(&root, ".Page"), 0);
	assert_eq!(count(&root, ".Loading"), 0);
	assert!(text(&root, ".ErrorList li").contains("offline"));
	assert_eq!(count(&root, ".Toast--error"), 1);
	assert_eq!(count(&root, ".Header"), 1);
	assert_eq!(count(&root, ".Footer"), 1);
	unmount(handle, root);
}

#[wasm_bindgen_test(async)]
async fn menu_button_opens_drawer() {
	let (handle, root) = mount_at("/", builtin_loader());
	settle().await;
	let menu: HtmlElement = root
		.query_selector(".Header button")
		.unwrap()
		.unwrap()
		.unchecked_into();
	menu.click();
	settle().await;
	// The drawer is rendered outside the application root.
	let nav = document().query_selector(".AppDrawer-nav").unwrap();
	assert!(nav.is_some());
	unmount(handle, root);
}
