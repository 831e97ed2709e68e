//! Tab bar navigation combined with swipeable paging.
//!
//! [TabContainer] owns an ordered list of [Page]s, displays exactly one of
//! them through a host-supplied [PagingSurface] and keeps a [TabStrip]
//! highlighted in sync as pages are added, removed, shown programmatically
//! or swiped between. While the active page's nested navigation stack is
//! pushed past its root, swipe navigation is frozen and the strip slides
//! off screen.
//!
//! All operations run on the host's single UI context. The container is
//! pumped once per turn through [TabContainer::update], which drains
//! nested-stack events and advances the strip offset animation.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;

use indexmap::IndexMap;

use pagedeck_core::config::Config;
use pagedeck_core::error::PageError;
use pagedeck_core::geometry::{compute_layout, LayoutGeometry, SizeClass};
use pagedeck_core::page::{Page, PageId};
use pagedeck_core::stack::{StackEvent, StackSubscription};
use pagedeck_core::strip::{TabItem, TabStrip};
use pagedeck_core::surface::{PagingSurface, TransitionDirection};
use pagedeck_core::update::Update;

use crate::offset_animation::OffsetAnimation;

type StackInbox = Rc<RefCell<VecDeque<(PageId, StackEvent)>>>;

/// A container widget that pairs a swipeable paging surface with a tab
/// strip and keeps the two in sync.
pub struct TabContainer {
    config: Config,
    surface: Box<dyn PagingSurface>,
    strip: Box<dyn TabStrip>,
    pages: IndexMap<PageId, Page>,
    subscriptions: Vec<(PageId, StackSubscription)>,
    current: Option<PageId>,
    suppressed: bool,
    size_class: SizeClass,
    safe_area_bottom: f32,
    geometry: LayoutGeometry,
    offset: f32,
    pending_offset: Option<f32>,
    animation: Option<OffsetAnimation>,
    transition_in_flight: bool,
    inbox: StackInbox,
}

impl TabContainer {
    /// Create a container around the given surface and strip.
    pub fn new(config: Config, surface: Box<dyn PagingSurface>, strip: Box<dyn TabStrip>) -> Self {
        let geometry = compute_layout(&config, SizeClass::Regular, 0.0, false);
        Self {
            config,
            surface,
            strip,
            pages: IndexMap::new(),
            subscriptions: Vec::new(),
            current: None,
            suppressed: false,
            size_class: SizeClass::Regular,
            safe_area_bottom: 0.0,
            geometry,
            offset: 0.0,
            pending_offset: None,
            animation: None,
            transition_in_flight: false,
            inbox: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// The construction-time configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The pages in display/tab order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    /// The number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The currently displayed page, if any.
    pub fn current_page(&self) -> Option<&Page> {
        self.current.and_then(|id| self.pages.get(&id))
    }

    /// True while swipe navigation is frozen by a nested stack.
    pub fn is_swipe_suppressed(&self) -> bool {
        self.suppressed
    }

    /// The geometry computed by the most recent layout pass.
    pub fn geometry(&self) -> LayoutGeometry {
        self.geometry
    }

    /// The strip's current vertical offset, including any in-flight slide.
    pub fn strip_offset(&self) -> f32 {
        self.offset
    }

    /// Replaces the entire page list.
    ///
    /// Observation of the previous pages' nested stacks is cancelled, the
    /// strip's item list is rebuilt wholesale, and the first page of the
    /// new list becomes current with an animated transition. An empty list
    /// leaves the container with no current page.
    pub fn set_pages(&mut self, pages: Vec<Page>) -> Update {
        self.cancel_all_subscriptions();
        self.pages.clear();
        self.current = None;
        self.transition_in_flight = false;

        for page in pages {
            if self.pages.contains_key(&page.id()) {
                log::warn!(
                    "TabContainer: duplicate page {} in set_pages, keeping the first occurrence",
                    page.id()
                );
                continue;
            }
            self.pages.insert(page.id(), page);
        }

        let items = self
            .pages
            .values()
            .map(|page| TabItem::new(page.title()))
            .collect();
        self.strip.set_items(items);

        let pages: Vec<Page> = self.pages.values().cloned().collect();
        for page in &pages {
            self.subscribe_stack(page);
        }

        let mut update = Update::LAYOUT | Update::DRAW;
        if self.suppressed {
            self.suppressed = false;
            self.geometry = compute_layout(
                &self.config,
                self.size_class,
                self.safe_area_bottom,
                self.suppressed,
            );
            update |= self.schedule_offset(self.geometry.strip_offset);
        }

        match pages.first() {
            Some(first) => update |= self.show_known_page(first.id(), true),
            None => self.strip.set_highlighted(None),
        }
        update
    }

    /// Appends a page.
    ///
    /// Adding a page that is already present is a warn-logged no-op. The
    /// new page's scrollable content receives the current bottom inset,
    /// and it becomes current if no page was current before.
    pub fn add_page(&mut self, page: Page) -> Update {
        if self.pages.contains_key(&page.id()) {
            log::warn!(
                "TabContainer: page {} (\"{}\") has already been added",
                page.id(),
                page.title()
            );
            return Update::empty();
        }

        self.strip.push_item(TabItem::new(page.title()));
        self.subscribe_stack(&page);
        self.apply_insets_to(&page);

        let id = page.id();
        self.pages.insert(id, page);

        let mut update = Update::LAYOUT | Update::DRAW;
        if self.current.is_none() {
            update |= self.show_known_page(id, true);
        }
        update
    }

    /// Removes a page.
    ///
    /// Removing an absent page is a no-op. When the removed page was
    /// current, the list's new first page is promoted (or the container is
    /// left with no current page); otherwise the strip highlight is
    /// re-pointed at the current page's shifted index.
    pub fn remove_page(&mut self, page: &Page) -> Update {
        let Some(index) = self.pages.get_index_of(&page.id()) else {
            log::debug!(
                "TabContainer: remove_page({}) ignored, page not present",
                page.id()
            );
            return Update::empty();
        };

        self.pages.shift_remove(&page.id());
        self.strip.remove_item(index);
        self.cancel_subscription(page.id());

        let mut update = Update::LAYOUT | Update::DRAW;
        if self.current == Some(page.id()) {
            self.current = None;
            if self.suppressed {
                self.suppressed = false;
                self.geometry = compute_layout(
                    &self.config,
                    self.size_class,
                    self.safe_area_bottom,
                    self.suppressed,
                );
                update |= self.schedule_offset(self.geometry.strip_offset);
            }
            match self.pages.keys().next().copied() {
                Some(first_id) => update |= self.show_known_page(first_id, true),
                None => self.strip.set_highlighted(None),
            }
        } else if let Some(current_id) = self.current {
            self.strip.set_highlighted(self.pages.get_index_of(&current_id));
        }
        update
    }

    /// Shows a page already contained by the container.
    ///
    /// Returns [PageError::NotFound] when `page` is not a member. Showing
    /// the current page is a no-op, as is a request while an animated
    /// transition is still in flight.
    pub fn show_page(&mut self, page: &Page, animated: bool) -> Result<Update, PageError> {
        if !self.pages.contains_key(&page.id()) {
            return Err(PageError::NotFound(page.title().to_owned()));
        }
        if self.current == Some(page.id()) {
            return Ok(Update::empty());
        }
        if self.transition_in_flight {
            log::warn!(
                "TabContainer: ignoring show_page({}) while a transition is in flight",
                page.id()
            );
            return Ok(Update::empty());
        }
        Ok(self.show_known_page(page.id(), animated))
    }

    /// Answers the surface's "what comes before `candidate`" query.
    ///
    /// Wraps circularly: the neighbor before the first page is the last
    /// page. Returns `None` for every candidate while swipe navigation is
    /// suppressed.
    pub fn neighbor_before(&self, candidate: &Page) -> Option<Page> {
        self.wrapped_neighbor(candidate, false)
    }

    /// Answers the surface's "what comes after `candidate`" query.
    ///
    /// Wraps circularly: the neighbor after the last page is the first
    /// page. Returns `None` for every candidate while swipe navigation is
    /// suppressed.
    pub fn neighbor_after(&self, candidate: &Page) -> Option<Page> {
        self.wrapped_neighbor(candidate, true)
    }

    /// Handles a settled surface transition.
    ///
    /// After a swipe-driven transition completes, the surface's displayed
    /// page becomes current and the strip highlight catches up. A page no
    /// longer in the list is skipped.
    pub fn handle_transition_finished(&mut self, completed: bool, now_displaying: &Page) -> Update {
        self.transition_in_flight = false;
        if !completed {
            return Update::empty();
        }

        let Some(index) = self.pages.get_index_of(&now_displaying.id()) else {
            log::debug!(
                "TabContainer: transition settled on unknown page {}",
                now_displaying.id()
            );
            return Update::empty();
        };

        self.current = Some(now_displaying.id());
        self.strip.set_highlighted(Some(index));
        Update::DRAW
    }

    /// Handles a user tap on the strip item at `index`.
    pub fn handle_tab_selected(&mut self, index: usize) -> Update {
        let Some((_, page)) = self.pages.get_index(index) else {
            log::warn!("TabContainer: tab selection for out-of-range index {index}");
            return Update::empty();
        };
        let page = page.clone();
        self.show_page(&page, true).unwrap_or(Update::empty())
    }

    /// Recomputes the strip geometry for the given environment and applies
    /// the bottom inset to every scrollable page.
    ///
    /// Invoked by the host on every layout pass and on size-class change.
    pub fn layout(&mut self, size_class: SizeClass, safe_area_bottom: f32) -> Update {
        self.size_class = size_class;
        self.safe_area_bottom = safe_area_bottom;
        self.geometry = compute_layout(&self.config, size_class, safe_area_bottom, self.suppressed);

        let pages: Vec<Page> = self.pages.values().cloned().collect();
        for page in &pages {
            self.apply_insets_to(page);
        }
        Update::LAYOUT | Update::DRAW
    }

    /// Pumps the container for one turn of the host loop.
    ///
    /// Advances the strip offset animation, starts a slide scheduled on a
    /// previous turn and drains nested-stack events. Events drained this
    /// turn schedule their slide for the next turn; starting it inside the
    /// turn that processed the event can race an in-flight page transition
    /// on the surface.
    pub fn update(&mut self, now: Instant) -> Update {
        let mut update = Update::empty();

        if let Some(animation) = self.animation.take() {
            self.offset = animation.offset_at(now);
            update |= Update::DRAW;
            if !animation.is_complete(now) {
                self.animation = Some(animation);
                update |= Update::EVAL;
            }
        }

        if let Some(target) = self.pending_offset.take() {
            let resting_at_target =
                self.animation.is_none() && (target - self.offset).abs() < f32::EPSILON;
            if !resting_at_target {
                self.animation = Some(OffsetAnimation::new(
                    self.offset,
                    target,
                    now,
                    self.config.animation_duration,
                ));
                update |= Update::EVAL | Update::DRAW;
            }
        }

        let events: Vec<(PageId, StackEvent)> = self.inbox.borrow_mut().drain(..).collect();
        for (page_id, event) in events {
            update |= self.handle_stack_event(page_id, event);
        }
        update
    }

    fn show_known_page(&mut self, id: PageId, animated: bool) -> Update {
        if self.current == Some(id) {
            return Update::empty();
        }
        let Some((index, _, page)) = self.pages.get_full(&id) else {
            return Update::empty();
        };
        let page = page.clone();

        let direction = match self.current.and_then(|cur| self.pages.get_index_of(&cur)) {
            Some(current_index) if index < current_index => TransitionDirection::Reverse,
            _ => TransitionDirection::Forward,
        };

        self.surface.set_displayed(&page, direction, animated);
        if animated {
            self.transition_in_flight = true;
        }
        self.strip.set_highlighted(Some(index));
        self.current = Some(id);
        Update::DRAW
    }

    fn wrapped_neighbor(&self, candidate: &Page, forward: bool) -> Option<Page> {
        if self.suppressed || self.pages.is_empty() {
            return None;
        }

        let Some(index) = self.pages.get_index_of(&candidate.id()) else {
            // Stale candidate: degrade to the first page instead of
            // failing the surface's gesture bookkeeping.
            log::warn!(
                "TabContainer: neighbor query for unknown page {}, answering with the first page",
                candidate.id()
            );
            return self.pages.get_index(0).map(|(_, page)| page.clone());
        };

        let last = self.pages.len() - 1;
        let neighbor = match (forward, index) {
            (true, index) if index == last => 0,
            (true, index) => index + 1,
            (false, 0) => last,
            (false, index) => index - 1,
        };
        self.pages.get_index(neighbor).map(|(_, page)| page.clone())
    }

    fn handle_stack_event(&mut self, page_id: PageId, event: StackEvent) -> Update {
        match event {
            StackEvent::PushedPastRoot => {
                if self.suppressed {
                    log::debug!(
                        "TabContainer: stack of page {page_id} pushed while already suppressed"
                    );
                    return Update::empty();
                }
                self.suppressed = true;
            },
            StackEvent::PoppedToRoot => {
                if !self.suppressed {
                    return Update::empty();
                }
                self.suppressed = false;
            },
        }

        self.geometry = compute_layout(
            &self.config,
            self.size_class,
            self.safe_area_bottom,
            self.suppressed,
        );
        self.schedule_offset(self.geometry.strip_offset) | Update::DRAW
    }

    fn schedule_offset(&mut self, target: f32) -> Update {
        self.pending_offset = Some(target);
        Update::EVAL
    }

    fn subscribe_stack(&mut self, page: &Page) {
        if let Some(stack) = page.nested_stack() {
            let inbox = Rc::clone(&self.inbox);
            let id = page.id();
            let subscription = stack.subscribe(Rc::new(move |event| {
                inbox.borrow_mut().push_back((id, event));
            }));
            self.subscriptions.push((id, subscription));
        }
    }

    fn cancel_subscription(&mut self, id: PageId) {
        if let Some(position) = self
            .subscriptions
            .iter()
            .position(|(page_id, _)| *page_id == id)
        {
            let (_, subscription) = self.subscriptions.remove(position);
            subscription.cancel();
        }
    }

    fn cancel_all_subscriptions(&mut self) {
        for (_, subscription) in self.subscriptions.drain(..) {
            subscription.cancel();
        }
    }

    fn apply_insets_to(&self, page: &Page) {
        let inset = self.geometry.content_inset;
        if let Some(region) = page.scroll_region() {
            region.set_bottom_insets(inset, inset);
        } else if let Some(stack) = page.nested_stack() {
            if let Some(region) = stack.top_scroll_region() {
                region.set_bottom_insets(inset, inset);
            }
        }
    }
}
