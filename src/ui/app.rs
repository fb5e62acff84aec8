use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::carousel::{CarouselController, CarouselTiming, Clock, SystemClock};
use crate::config::Config;
use crate::content::{Collection, ContentClient, ListingEntry, Testimonial};
use crate::listing::listing_loader;
use crate::loader::{CollectionLoader, CollectionResult, LoadPolicy, LoadTask};

/// Idle wake-up interval of the render loop.
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Redraw interval while a slide is moving.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// State of the terminal preview: one listing panel and the testimonial
/// carousel below it.
pub struct PreviewApp<C: Clock = SystemClock> {
    should_quit: bool,
    listing: CollectionLoader<ListingEntry, Collection>,
    testimonials: CollectionLoader<Testimonial>,
    carousel: CarouselController<C>,
}

impl<C: Clock> PreviewApp<C> {
    pub fn new(
        listing: CollectionLoader<ListingEntry, Collection>,
        testimonials: CollectionLoader<Testimonial>,
        carousel: CarouselController<C>,
    ) -> Self {
        Self {
            should_quit: false,
            listing,
            testimonials,
            carousel,
        }
    }

    /// Wire the preview against a live content service.
    pub fn connect(client: ContentClient, config: &Config, clock: C) -> Self {
        let listing = listing_loader(client.clone(), Collection::Articles, config.listings.clone());
        let testimonials = testimonial_loader(client, config.listings.testimonials_limit);
        let carousel = CarouselController::new(0, CarouselTiming::from(&config.carousel), clock);
        Self::new(listing, testimonials, carousel)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn active_collection(&self) -> Collection {
        self.listing.dependencies()
    }

    pub fn listing(&self) -> CollectionResult<ListingEntry> {
        self.listing.snapshot()
    }

    pub fn testimonials(&self) -> CollectionResult<Testimonial> {
        self.testimonials.snapshot()
    }

    pub fn carousel(&self) -> &CarouselController<C> {
        &self.carousel
    }

    /// Initial fetch of both collections.
    pub fn mount(&mut self) -> Vec<LoadTask> {
        vec![self.listing.refresh(), self.testimonials.refresh()]
    }

    /// Re-fetch both collections, keeping what is on screen meanwhile.
    pub fn reload(&mut self) -> Vec<LoadTask> {
        tracing::info!("Reload requested");
        self.mount()
    }

    /// Switch the listing panel to the following collection.
    pub fn show_next_listing(&mut self) -> Option<LoadTask> {
        let next = self.active_collection().next_listing();
        self.listing.update_dependencies(next)
    }

    /// Handle a key press. Returns the fetches it started.
    pub fn on_key(&mut self, key: KeyEvent) -> Vec<LoadTask> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_quit()
            }
            KeyCode::Right => {
                self.carousel.next();
            }
            KeyCode::Left => {
                self.carousel.previous();
            }
            KeyCode::Tab => return self.show_next_listing().into_iter().collect(),
            KeyCode::Char('r') => return self.reload(),
            _ => {}
        }
        Vec::new()
    }

    /// Sync the carousel with the testimonials on hand and fire its due
    /// deadlines.
    pub fn on_tick(&mut self) {
        let count = self.testimonials.snapshot().items.len();
        self.carousel.set_item_count(count);
        self.carousel.poll();
    }

    /// Called after each drawn frame.
    pub fn frame_committed(&mut self) {
        self.carousel.frame_committed();
    }

    /// Tick, draw one frame with `draw`, then commit it.
    ///
    /// A failed draw tears the app down before the error is returned.
    pub fn render_frame<E>(
        &mut self,
        draw: impl FnOnce(&Self) -> Result<(), E>,
    ) -> Result<(), E> {
        self.on_tick();
        if let Err(err) = draw(&*self) {
            tracing::error!("Frame draw failed, tearing down");
            self.teardown();
            return Err(err);
        }
        self.frame_committed();
        Ok(())
    }

    /// When the render loop should wake up next without input.
    pub fn next_wake(&self, now: Instant) -> Instant {
        if self.carousel.is_animating() {
            return now + FRAME_INTERVAL;
        }
        let tick = now + TICK_RATE;
        match self.carousel.next_deadline() {
            Some(deadline) => deadline.min(tick),
            None => tick,
        }
    }

    /// Stop everything: in-flight fetches are dropped on arrival and no
    /// carousel timer fires again.
    pub fn teardown(&mut self) {
        self.listing.teardown();
        self.testimonials.teardown();
        self.carousel.teardown();
    }
}

/// Testimonials newest first, at most `limit`.
pub fn testimonial_loader(client: ContentClient, limit: usize) -> CollectionLoader<Testimonial> {
    let policy = LoadPolicy::new()
        .newest_first_by(|t: &Testimonial| t.created_at.clone())
        .limit(limit);
    CollectionLoader::new("testimonials", (), policy, move |()| {
        let client = client.clone();
        async move { client.testimonials().await }
    })
}
