//! Team roster model.
//!
//! A team carries its male and female player lists separately (the league
//! runs gender-matched lines) plus a membership set distinguishing its own
//! roster from substitutes added on game night.

use rustc_hash::FxHashSet;

/// Gender of a league player, as declared in the roster document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Unknown,
    Female,
    Male,
}

/// One team: identity plus roster.
#[derive(Clone, Debug, Default)]
pub struct Team {
    /// Display name.
    pub name: String,
    /// League-assigned numeric id.
    pub id: u32,

    men: Vec<String>,
    women: Vec<String>,
    roster: FxHashSet<String>,
}

impl Team {
    /// Create a team with an empty roster.
    #[must_use]
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            men: Vec::new(),
            women: Vec::new(),
            roster: FxHashSet::default(),
        }
    }

    /// Add a player to the playing lists without marking them a roster
    /// member. Used for game-night substitutes.
    pub fn add_player(&mut self, name: impl Into<String>, gender: Gender) {
        let name = name.into();
        match gender {
            Gender::Male => self.men.push(name),
            _ => self.women.push(name),
        }
    }

    /// Add a proper roster member.
    pub fn add_roster_player(&mut self, name: impl Into<String>, is_male: bool) {
        let name = name.into();
        self.roster.insert(name.clone());
        self.add_player(
            name,
            if is_male { Gender::Male } else { Gender::Female },
        );
    }

    /// Remove a player from the playing lists. Roster membership is
    /// unaffected; a regular who sits out tonight is still on the roster.
    pub fn remove_player(&mut self, name: &str, is_male: bool) {
        let list = if is_male { &mut self.men } else { &mut self.women };
        if let Some(position) = list.iter().position(|player| player == name) {
            list.remove(position);
        }
    }

    /// Whether the player is a proper roster member (not a substitute).
    #[must_use]
    pub fn is_on_roster(&self, name: &str) -> bool {
        self.roster.contains(name)
    }

    /// All playing names, women first then men (the display order).
    #[must_use]
    pub fn roster(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.women.len() + self.men.len());
        names.extend(self.women.iter().cloned());
        names.extend(self.men.iter().cloned());
        names
    }

    /// The men currently listed to play.
    #[must_use]
    pub fn men(&self) -> &[String] {
        &self.men
    }

    /// The women currently listed to play.
    #[must_use]
    pub fn women(&self) -> &[String] {
        &self.women
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_membership() {
        let mut team = Team::new("Karma Down Under", 7);
        team.add_roster_player("Ana", false);
        team.add_roster_player("Bob", true);
        team.add_player("Sub Sam", Gender::Male);

        assert!(team.is_on_roster("Ana"));
        assert!(team.is_on_roster("Bob"));
        assert!(!team.is_on_roster("Sub Sam"));
    }

    #[test]
    fn test_roster_order_women_first() {
        let mut team = Team::new("Flick Nation", 3);
        team.add_roster_player("Bob", true);
        team.add_roster_player("Ana", false);
        team.add_roster_player("Cleo", false);

        assert_eq!(team.roster(), vec!["Ana", "Cleo", "Bob"]);
    }

    #[test]
    fn test_remove_player_keeps_roster_membership() {
        let mut team = Team::new("Huck Finn", 9);
        team.add_roster_player("Bob", true);

        team.remove_player("Bob", true);

        assert!(team.men().is_empty());
        assert!(team.is_on_roster("Bob"));
    }

    #[test]
    fn test_remove_missing_player_is_noop() {
        let mut team = Team::new("Huck Finn", 9);
        team.add_roster_player("Ana", false);

        team.remove_player("Nobody", false);

        assert_eq!(team.women(), ["Ana"]);
    }
}
