use rand::thread_rng as r;
use rand::Rng as _;

use super::PageWindow;
use crate::PageNum;

#[test]
fn surround_count_narrows_window() {
	let mut window = PageWindow::new(10, 5);
	window.set_surround_count(Some(2));
	assert_eq!(window.pages(), 3..=7);
	assert!(window.has_previous());
	assert!(window.has_next());
}

#[test]
fn no_surround_count_shows_everything() {
	let mut window = PageWindow::new(10, 5);
	window.set_surround_count(None);
	assert_eq!(window.pages(), 1..=10);
	assert!(!window.has_previous());
	assert!(!window.has_next());
}

#[test]
fn window_is_clamped_at_edges() {
	let mut window = PageWindow::new(4, 1);
	window.set_surround_count(Some(3));
	assert_eq!(window.pages(), 1..=4);

	let mut window = PageWindow::new(4, 4);
	window.set_surround_count(Some(1));
	assert_eq!(window.pages(), 3..=4);
	assert!(window.has_previous());
	assert!(!window.has_next());
}

#[test]
fn last_page_absorbs_remainder() {
	let window = PageWindow::with_items(5, 5, Some(95), Some(20));
	assert_eq!(window.per_page_start(), Some(81));
	assert_eq!(window.per_page_end(), Some(95));
}

#[test]
fn first_and_middle_page_bounds() {
	let window = PageWindow::with_items(5, 1, Some(95), Some(20));
	assert_eq!(window.per_page_start(), Some(1));
	assert_eq!(window.per_page_end(), Some(20));

	let window = PageWindow::with_items(5, 3, Some(95), Some(20));
	assert_eq!(window.per_page_start(), Some(41));
	assert_eq!(window.per_page_end(), Some(60));
}

#[test]
fn bounds_survive_surround_count() {
	let mut window = PageWindow::with_items(10, 4, Some(200), Some(20));
	window.set_surround_count(Some(0));
	assert_eq!(window.pages(), 4..=4);
	assert_eq!(window.per_page_start(), Some(61));
	assert_eq!(window.per_page_end(), Some(80));
}

#[test]
fn bounds_need_total_and_per_page() {
	assert_eq!(PageWindow::with_items(5, 2, None, Some(20)).per_page_start(), None);
	assert_eq!(PageWindow::with_items(5, 2, Some(95), None).per_page_end(), None);
}

#[test]
fn zero_pages() {
	let mut window = PageWindow::with_items(0, 1, Some(0), Some(20));
	assert_eq!(window.per_page_start(), None);
	assert_eq!(window.per_page_end(), None);
	assert!(window.pages().is_empty());

	window.set_surround_count(Some(2));
	assert!(window.pages().is_empty());
	assert!(!window.has_next());
}

#[test]
fn current_past_the_end_is_not_clamped() {
	let mut window = PageWindow::new(3, 7);
	window.set_surround_count(Some(1));
	assert_eq!(window.first_page_number(), 6);
	assert_eq!(window.last_page_number(), 3);
	assert!(window.pages().is_empty());
}

#[test]
fn extreme_values_saturate() {
	let mut window = PageWindow::with_items(5, PageNum::MAX, Some(95), Some(20));
	assert_eq!(window.per_page_start(), Some(PageNum::MAX));
	assert_eq!(window.per_page_end(), Some(PageNum::MAX));
	assert_eq!(window.previous_page_number(), Some(PageNum::MAX - 1));
	assert_eq!(window.next_page_number(), None);

	window.set_surround_count(Some(PageNum::MAX));
	assert_eq!(window.first_page_number(), 1);
	assert_eq!(window.last_page_number(), 5);
	assert!(!window.has_next_page());

	let mut window = PageWindow::new(5, 3);
	window.set_surround_count(Some(PageNum::MAX));
	assert_eq!(window.pages(), 1..=5);
	window.set_surround_count(Some(PageNum::MIN));
	assert!(window.pages().is_empty());
}

#[test]
fn neighbouring_page_numbers() {
	let window = PageWindow::new(3, 1);
	assert_eq!(window.previous_page_number(), None);
	assert_eq!(window.next_page_number(), Some(2));

	let window = PageWindow::new(3, 3);
	assert_eq!(window.previous_page_number(), Some(2));
	assert_eq!(window.next_page_number(), None);
}

#[test]
fn single_page_and_window_relative_neighbours_differ() {
	let mut window = PageWindow::new(10, 5);
	window.set_surround_count(Some(2));
	// the window starts at 3, so "previous" means page 2 while "previous page" means page 4
	assert!(window.has_previous());
	assert!(window.has_previous_page());

	let mut window = PageWindow::new(10, 2);
	window.set_surround_count(Some(2));
	assert!(!window.has_previous());
	assert!(window.has_previous_page());

	let mut window = PageWindow::new(10, 9);
	window.set_surround_count(Some(1));
	assert!(!window.has_next());
	assert!(window.has_next_page());
}

fn random_window() -> (PageNum, PageNum, PageNum) {
	let page_count = r().gen_range(1..=500);
	let current = r().gen_range(1..=page_count);
	let surround = r().gen_range(0..=50);
	(page_count, current, surround)
}

#[test]
fn in_range_windows_are_well_formed() {
	for _ in 0..1000 {
		let (page_count, current, surround) = random_window();
		let mut window = PageWindow::new(page_count, current);
		window.set_surround_count(Some(surround));

		let (first, last) = (window.first_page_number(), window.last_page_number());
		assert!(1 <= first, "{page_count} {current} {surround}");
		assert!(first <= last, "{page_count} {current} {surround}");
		assert!(last <= page_count, "{page_count} {current} {surround}");
		assert!(window.pages().contains(&current));
	}
}

#[test]
fn computation_is_idempotent() {
	for _ in 0..200 {
		let (page_count, current, surround) = random_window();
		let per_page = r().gen_range(1..=100);
		let total = page_count * per_page - r().gen_range(0..per_page);

		let mut once = PageWindow::with_items(page_count, current, Some(total), Some(per_page));
		once.set_surround_count(Some(surround));
		let mut twice = once;
		twice.set_surround_count(Some(surround));

		assert_eq!(once, twice);
		assert_eq!(
			once,
			*PageWindow::with_items(page_count, current, Some(total), Some(per_page))
				.set_surround_count(Some(surround))
		);
	}
}
