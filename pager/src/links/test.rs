use itertools::Itertools as _;
use rand::thread_rng as r;
use rand::Rng as _;

use super::{Link, Pagination};
use crate::{PageWindow, Selector, UriTemplate};

fn pagination(base: &str, selector: Selector, page_count: i64, current: i64) -> Pagination {
	Pagination::new(
		PageWindow::new(page_count, current),
		UriTemplate::parse(base, selector).unwrap(),
	)
}

fn query(page_count: i64, current: i64) -> Pagination {
	pagination(
		"http://example.com/articles?sort=new",
		Selector::default(),
		page_count,
		current,
	)
}

#[test]
fn window_links() {
	let pagination = query(10, 5).with_surround_count(Some(2));
	let links = pagination.links();
	assert_eq!(links.iter().map(|link| link.title).collect_vec(), [3, 4, 5, 6, 7]);
	assert_eq!(
		links[2],
		Link {
			uri: "http://example.com/articles?sort=new&page=5".into(),
			title: 5,
			active: true,
		}
	);
	assert_eq!(links.iter().filter(|link| link.active).count(), 1);
}

#[test]
fn window_relative_neighbours() {
	let pagination = query(10, 5).with_surround_count(Some(2));
	assert!(pagination.has_previous());
	assert_eq!(
		pagination.previous_uri().as_deref(),
		Some("http://example.com/articles?sort=new&page=2")
	);
	assert!(pagination.has_next());
	assert_eq!(
		pagination.next_uri().as_deref(),
		Some("http://example.com/articles?sort=new&page=8")
	);
}

#[test]
fn single_page_neighbours() {
	let pagination = query(10, 5).with_surround_count(Some(2));
	assert_eq!(
		pagination.previous_page_uri().as_deref(),
		Some("http://example.com/articles?sort=new&page=4")
	);
	assert_eq!(
		pagination.next_page_uri().as_deref(),
		Some("http://example.com/articles?sort=new&page=6")
	);
}

#[test]
fn no_neighbours_at_edges() {
	let pagination = query(3, 1);
	assert_eq!(pagination.previous_uri(), None);
	assert_eq!(pagination.previous_page_uri(), None);
	assert_eq!(pagination.next_uri(), None);
	assert!(pagination.next_page_uri().is_some());

	let pagination = query(3, 3);
	assert_eq!(pagination.next_page_uri(), None);
}

#[test]
fn fixed_uris() {
	let pagination = pagination("/articles/1", Selector::Segment(2), 12, 4);
	assert_eq!(pagination.first_uri(), "/articles/1");
	assert_eq!(pagination.current_uri(), "/articles/4");
	assert_eq!(pagination.last_uri(), "/articles/12");
}

#[test]
fn segment_links_keep_query_and_fragment() {
	let pagination = pagination(
		"https://example.com/blog/page/1?tag=rust#posts",
		Selector::Segment(3),
		3,
		2,
	);
	assert_eq!(
		pagination.links().into_iter().map(|link| link.uri).collect_vec(),
		[
			"https://example.com/blog/page/1?tag=rust#posts",
			"https://example.com/blog/page/2?tag=rust#posts",
			"https://example.com/blog/page/3?tag=rust#posts",
		]
	);
}

#[test]
fn no_links_without_pages() {
	assert!(query(0, 1).links().is_empty());
	assert!(query(0, 1).with_surround_count(Some(3)).links().is_empty());
}

#[test]
fn out_of_window_current_has_no_active_link() {
	let links = query(3, 7).links();
	assert_eq!(links.len(), 3);
	assert!(links.iter().all(|link| !link.active));
}

#[test]
fn links_serialize_for_views() {
	let links = query(1, 1).links();
	assert_eq!(
		serde_json::to_value(&links).unwrap(),
		serde_json::json!([{
			"uri": "http://example.com/articles?sort=new&page=1",
			"title": 1,
			"active": true,
		}])
	);
}

#[test]
fn random_link_counts() {
	for _ in 0..300 {
		let page_count = r().gen_range(0..=60);
		let current = r().gen_range(1..=page_count.max(1) + 3);
		let surround = r().gen_range(0..=8);
		let pagination = query(page_count, current).with_surround_count(Some(surround));
		let window = pagination.window();
		let links = pagination.links();

		let expected_len = (window.last_page_number() - window.first_page_number() + 1).max(0);
		assert_eq!(links.len() as i64, expected_len);
		assert!(links.iter().tuple_windows().all(|(a, b)| a.title + 1 == b.title));

		let active = links.iter().filter(|link| link.active).count();
		if window.pages().contains(&current) {
			assert_eq!(active, 1);
		} else {
			assert_eq!(active, 0);
		}
	}
}
