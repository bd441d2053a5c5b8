use crate::types::CatKind;

/// Something a household can hand its chores to
pub trait Cat {
    /// Describe what the cat does. Never fails and has no side effects.
    fn perform_action(&self) -> String;

    fn kind(&self) -> CatKind;

    fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlayCat;

#[derive(Debug, Clone, Copy, Default)]
pub struct HunterCat;

#[derive(Debug, Clone, Copy, Default)]
pub struct CleanCat;

impl Cat for PlayCat {
    fn perform_action(&self) -> String {
        "chasing a ball of yarn".to_string()
    }

    fn kind(&self) -> CatKind {
        CatKind::Play
    }
}

impl Cat for HunterCat {
    fn perform_action(&self) -> String {
        "stalking a mouse in the barn".to_string()
    }

    fn kind(&self) -> CatKind {
        CatKind::Hunter
    }
}

impl Cat for CleanCat {
    fn perform_action(&self) -> String {
        "licking its paws clean".to_string()
    }

    fn kind(&self) -> CatKind {
        CatKind::Clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn each_cat_has_its_own_action() {
        assert_eq!(PlayCat.perform_action(), "chasing a ball of yarn");
        assert_eq!(HunterCat.perform_action(), "stalking a mouse in the barn");
        assert_eq!(CleanCat.perform_action(), "licking its paws clean");

        let cats: [&dyn Cat; 3] = [&PlayCat, &HunterCat, &CleanCat];
        let actions: HashSet<String> = cats.iter().map(|c| c.perform_action()).collect();
        assert_eq!(actions.len(), 3);
    }

    #[test]
    fn action_is_stable_across_calls() {
        let cat = HunterCat;
        assert_eq!(cat.perform_action(), cat.perform_action());
    }

    #[test]
    fn type_name_follows_kind() {
        assert_eq!(PlayCat.type_name(), "PlayCat");
        assert_eq!(HunterCat.type_name(), "HunterCat");
        assert_eq!(CleanCat.type_name(), "CleanCat");
    }
}
