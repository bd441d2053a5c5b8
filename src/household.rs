use log::trace;

use crate::cat::Cat;

/// Holds exactly one cat at a time and hands it the work.
///
/// The household only borrows its cat; the cats outlive it.
pub struct Household<'a> {
    cat: &'a dyn Cat,
}

impl<'a> Household<'a> {
    pub fn new(cat: &'a dyn Cat) -> Self {
        Household { cat }
    }

    /// Swap in a different cat. Any cat may replace any other.
    pub fn set_cat(&mut self, cat: &'a dyn Cat) {
        trace!("household cat {} -> {}", self.cat.type_name(), cat.type_name());
        self.cat = cat;
    }

    pub fn cat(&self) -> &'a dyn Cat {
        self.cat
    }

    /// Let the current cat do its thing and return what it did
    pub fn use_cat(&self) -> String {
        self.cat.perform_action()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::{CleanCat, HunterCat, PlayCat};

    #[test]
    fn use_cat_delegates_to_held_cat() {
        let cats: [&dyn Cat; 3] = [&PlayCat, &HunterCat, &CleanCat];
        let mut household = Household::new(&PlayCat);
        for cat in cats {
            household.set_cat(cat);
            assert_eq!(household.use_cat(), cat.perform_action());
            assert_eq!(household.cat().kind(), cat.kind());
        }
    }

    #[test]
    fn set_cat_twice_is_same_as_once() {
        let mut once = Household::new(&PlayCat);
        once.set_cat(&CleanCat);

        let mut twice = Household::new(&PlayCat);
        twice.set_cat(&CleanCat);
        twice.set_cat(&CleanCat);

        assert_eq!(once.use_cat(), twice.use_cat());
    }

    #[test]
    fn play_then_hunter_then_clean() {
        let play = PlayCat;
        let hunter = HunterCat;
        let clean = CleanCat;

        let mut household = Household::new(&play);
        let played = household.use_cat();
        assert_eq!(played, "chasing a ball of yarn");

        household.set_cat(&hunter);
        let hunted = household.use_cat();
        assert_eq!(hunted, "stalking a mouse in the barn");
        assert_ne!(hunted, played);

        household.set_cat(&clean);
        assert_eq!(household.use_cat(), "licking its paws clean");
    }
}
