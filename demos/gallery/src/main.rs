//! Gallery demo for the pagedeck tab container.
//!
//! Drives a [TabContainer] headlessly with console-backed widget
//! implementations: tab taps, swipes, a nested navigation stack that
//! hides the strip, and a size-class change. Run with
//! `RUST_LOG=debug cargo run -p gallery` to see the container's logging.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use nalgebra::Vector2;
use pagedeck_core::config::Config;
use pagedeck_core::geometry::SizeClass;
use pagedeck_core::page::Page;
use pagedeck_core::scroll::ScrollRegion;
use pagedeck_core::strip::{TabItem, TabStrip};
use pagedeck_core::surface::{PagingSurface, TransitionDirection};
use pagedeck_core::update::Update;
use pagedeck_widgets::nav_stack::{NavStack, StackEntry};
use pagedeck_widgets::tab_container::TabContainer;

/// Shared model behind the console tab strip.
#[derive(Default)]
struct StripModel {
    items: Vec<TabItem>,
    highlighted: Option<usize>,
}

impl StripModel {
    fn describe(&self) -> String {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if self.highlighted == Some(index) {
                    format!("[{}]", item.label)
                } else {
                    format!(" {} ", item.label)
                }
            })
            .collect::<Vec<_>>()
            .join("|")
    }
}

struct ConsoleStrip(Rc<RefCell<StripModel>>);

impl TabStrip for ConsoleStrip {
    fn set_items(&mut self, items: Vec<TabItem>) {
        self.0.borrow_mut().items = items;
    }

    fn push_item(&mut self, item: TabItem) {
        self.0.borrow_mut().items.push(item);
    }

    fn remove_item(&mut self, index: usize) {
        self.0.borrow_mut().items.remove(index);
    }

    fn set_highlighted(&mut self, index: Option<usize>) {
        self.0.borrow_mut().highlighted = index;
    }
}

/// Shared model behind the console paging surface.
#[derive(Default)]
struct SurfaceModel {
    displayed: Option<Page>,
    page_spacing: f32,
}

struct ConsoleSurface(Rc<RefCell<SurfaceModel>>);

impl PagingSurface for ConsoleSurface {
    fn set_displayed(&mut self, page: &Page, direction: TransitionDirection, animated: bool) {
        let arrow = match direction {
            TransitionDirection::Forward => "->",
            TransitionDirection::Reverse => "<-",
        };
        let style = if animated { "slide" } else { "jump" };
        println!("  surface {arrow} \"{}\" ({style})", page.title());
        self.0.borrow_mut().displayed = Some(page.clone());
    }

    fn displayed(&self) -> Option<Page> {
        self.0.borrow().displayed.clone()
    }
}

/// A scrollable list pane with container-managed bottom insets.
struct ScrollPane {
    rows: Vec<String>,
    bottom_content_inset: RefCell<f32>,
    bottom_indicator_inset: RefCell<f32>,
}

impl ScrollPane {
    fn new(rows: Vec<String>) -> Self {
        Self {
            rows,
            bottom_content_inset: RefCell::new(0.0),
            bottom_indicator_inset: RefCell::new(0.0),
        }
    }

    fn describe(&self) -> String {
        format!(
            "{} rows, bottom inset {:.0}/{:.0}",
            self.rows.len(),
            self.bottom_content_inset.borrow(),
            self.bottom_indicator_inset.borrow()
        )
    }
}

impl ScrollRegion for ScrollPane {
    fn set_bottom_insets(&self, content: f32, indicator: f32) {
        *self.bottom_content_inset.borrow_mut() = content;
        *self.bottom_indicator_inset.borrow_mut() = indicator;
    }
}

fn size_class_for(viewport: Vector2<f32>) -> SizeClass {
    if viewport.y < 480.0 {
        SizeClass::Compact
    } else {
        SizeClass::Regular
    }
}

/// Pumps the container until it stops asking for more turns.
fn pump(container: &mut TabContainer) {
    for frame in 0.. {
        let update = container.update(Instant::now());
        if frame % 4 == 0 && container.strip_offset() > 0.0 {
            println!("  strip offset {:.0}", container.strip_offset());
        }
        if !update.contains(Update::EVAL) {
            break;
        }
        thread::sleep(Duration::from_millis(16));
    }
}

/// Simulates a horizontal swipe by asking the container for the neighbor
/// the surface's gesture recognizer would have preloaded.
fn swipe(container: &mut TabContainer, surface_model: &Rc<RefCell<SurfaceModel>>, forward: bool) {
    let Some(current) = surface_model.borrow().displayed.clone() else {
        return;
    };

    let neighbor = if forward {
        container.neighbor_after(&current)
    } else {
        container.neighbor_before(&current)
    };

    match neighbor {
        Some(next) => {
            println!(
                "  swipe {} \"{}\"",
                if forward { "to" } else { "back to" },
                next.title()
            );
            surface_model.borrow_mut().displayed = Some(next.clone());
            container.handle_transition_finished(true, &next);
        },
        None => println!("  swipe ignored (navigation frozen)"),
    }
}

/// Settles the animated transition the last container operation started.
fn settle(container: &mut TabContainer, surface_model: &Rc<RefCell<SurfaceModel>>) {
    let displayed = surface_model.borrow().displayed.clone();
    if let Some(page) = displayed {
        container.handle_transition_finished(true, &page);
    }
}

fn main() {
    env_logger::init();

    let config = Config::default();
    let strip_model = Rc::new(RefCell::new(StripModel::default()));
    let surface_model = Rc::new(RefCell::new(SurfaceModel {
        displayed: None,
        page_spacing: config.page_spacing,
    }));

    let mut container = TabContainer::new(
        config,
        Box::new(ConsoleSurface(surface_model.clone())),
        Box::new(ConsoleStrip(strip_model.clone())),
    );

    let library_pane = Rc::new(ScrollPane::new(
        (1..=24).map(|index| format!("Book {index}")).collect(),
    ));
    let reader_stack = Rc::new(NavStack::new(StackEntry::new("Shelf")));

    let home = Page::plain("Home");
    let library = Page::scrollable("Library", library_pane.clone());
    let reader = Page::stack_host("Reader", reader_stack.clone());

    println!("== populate");
    container.set_pages(vec![home.clone(), library.clone(), reader.clone()]);
    settle(&mut container, &surface_model);
    let mut viewport = Vector2::new(390.0, 844.0);
    container.layout(size_class_for(viewport), 34.0);
    println!(
        "  strip: {} (page spacing {:.0})",
        strip_model.borrow().describe(),
        surface_model.borrow().page_spacing
    );
    println!("  library: {}", library_pane.describe());

    println!("== tab taps");
    container.handle_tab_selected(1);
    settle(&mut container, &surface_model);
    container.handle_tab_selected(2);
    settle(&mut container, &surface_model);
    println!("  strip: {}", strip_model.borrow().describe());

    println!("== swipes (wrapping)");
    swipe(&mut container, &surface_model, true);
    swipe(&mut container, &surface_model, true);
    swipe(&mut container, &surface_model, false);
    println!("  strip: {}", strip_model.borrow().describe());

    println!("== nested push hides the strip");
    container.handle_tab_selected(2);
    settle(&mut container, &surface_model);
    reader_stack.push(StackEntry::new("Chapter 1"));
    pump(&mut container);
    println!(
        "  reader is on \"{}\", swipe suppressed: {}",
        reader_stack.top_title(),
        container.is_swipe_suppressed()
    );
    swipe(&mut container, &surface_model, true);

    println!("== pop restores the strip");
    reader_stack.pop_to_root();
    pump(&mut container);
    println!(
        "  swipe suppressed: {}, strip offset {:.0}",
        container.is_swipe_suppressed(),
        container.strip_offset()
    );
    swipe(&mut container, &surface_model, true);

    println!("== rotate to a compact height");
    viewport = Vector2::new(844.0, 390.0);
    container.layout(size_class_for(viewport), 21.0);
    println!(
        "  strip height {:.0}, library: {}",
        container.geometry().strip_height,
        library_pane.describe()
    );

    println!("== membership changes");
    let settings = Page::plain("Settings");
    container.add_page(settings.clone());
    container.add_page(settings.clone());
    container.remove_page(&home);
    settle(&mut container, &surface_model);
    println!("  strip: {}", strip_model.borrow().describe());

    println!("== showing a foreign page fails cleanly");
    let foreign = Page::plain("Foreign");
    if let Err(error) = container.show_page(&foreign, true) {
        println!("  error: {error}");
    }
}
