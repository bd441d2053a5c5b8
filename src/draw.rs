use log::info;

use crate::cat::{Cat, CleanCat, HunterCat, PlayCat};
use crate::household::Household;
use crate::select::Selector;
use crate::types::{CatKind, Draw};

/// Lazily yields `count` draws. Each one hands a fresh household a newly
/// drawn cat and records what it did. Nothing is buffered, so `count` can be
/// as large as the caller likes.
pub struct Draws<'s> {
    play: PlayCat,
    hunter: HunterCat,
    clean: CleanCat,
    selector: &'s mut Selector,
    next: u64,
    count: u64,
}

/// Line up the three cats and draw from them `count` times
pub fn run_draws(selector: &mut Selector, count: u64) -> Draws<'_> {
    Draws {
        play: PlayCat,
        hunter: HunterCat,
        clean: CleanCat,
        selector,
        next: 0,
        count,
    }
}

impl Iterator for Draws<'_> {
    type Item = Draw;

    fn next(&mut self) -> Option<Draw> {
        if self.next >= self.count {
            return None;
        }
        let cats: [&dyn Cat; 3] = [&self.play, &self.hunter, &self.clean];
        let (index, cat) = self.selector.choose(&cats)?;

        // Every household starts out with the play cat
        let mut household = Household::new(&self.play);
        household.set_cat(cat);

        let n = self.next;
        self.next += 1;

        let action = household.use_cat();
        info!("draw {n}: {} is {action}", household.cat().type_name());
        Some(Draw {
            draw: n,
            index,
            cat: household.cat().kind(),
            type_name: household.cat().type_name().to_string(),
            action,
        })
    }
}

/// Running count of how often each kind came up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u64; 3],
}

impl Tally {
    pub fn record(&mut self, kind: CatKind) {
        self.counts[kind.index()] += 1;
    }

    pub fn count(&self, kind: CatKind) -> u64 {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Counts in `CatKind::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (CatKind, u64)> + '_ {
        CatKind::ALL.iter().map(|kind| (*kind, self.count(*kind)))
    }
}
