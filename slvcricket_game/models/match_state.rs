use uuid::Uuid;

use slvcricket_types::errors::GameError;

use super::player::{Player, normalize_name};

/// Ordered collection of the batters in the current match.
///
/// Insertion order is display and export order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchState {
    players: Vec<Player>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a match from already validated players.
    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn add_player(&mut self, name: &str) -> Result<Player, GameError> {
        let player = Player::new(name)?;
        self.players.push(player.clone());
        Ok(player)
    }

    pub fn update_score(&mut self, id: Uuid, runs: i64, balls: i64) -> Result<&Player, GameError> {
        let player = self.get_mut(id)?;
        player.set_score(runs, balls);
        Ok(player)
    }

    pub fn rename_player(&mut self, id: Uuid, name: &str) -> Result<&Player, GameError> {
        let name = normalize_name(name)?;
        let player = self.get_mut(id)?;
        player.name = name;
        Ok(player)
    }

    pub fn remove_player(&mut self, id: Uuid) -> Result<Player, GameError> {
        let index = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(GameError::PlayerNotFound(id))?;
        Ok(self.players.remove(index))
    }

    pub fn mark_out(&mut self, id: Uuid) -> Result<&Player, GameError> {
        let player = self.get_mut(id)?;
        player.mark_out();
        Ok(player)
    }

    pub fn reset(&mut self) {
        self.players.clear();
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut Player, GameError> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(GameError::PlayerNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(state: &MatchState) -> Vec<&str> {
        state.players().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_add_player_appends_fresh_record() {
        let mut state = MatchState::new();
        state.add_player("Virat").unwrap();
        let added = state.add_player("Rohit").unwrap();

        assert_eq!(state.len(), 2);
        assert_eq!(names(&state), vec!["Virat", "Rohit"]);
        assert_eq!(state.get(added.id), Some(&added));
        assert_eq!((added.runs, added.balls, added.is_out), (0, 0, false));
    }

    #[test]
    fn test_add_player_with_blank_name_leaves_state_unchanged() {
        let mut state = MatchState::new();
        state.add_player("Virat").unwrap();
        let before = state.clone();

        assert_eq!(state.add_player(""), Err(GameError::EmptyPlayerName));
        assert_eq!(state.add_player("   "), Err(GameError::EmptyPlayerName));
        assert_eq!(state, before);
    }

    #[test]
    fn test_player_ids_are_unique() {
        let mut state = MatchState::new();
        let a = state.add_player("Same").unwrap();
        let b = state.add_player("Same").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_score_floors_negative_input() {
        let mut state = MatchState::new();
        let player = state.add_player("Virat").unwrap();
        state.update_score(player.id, 12, 9).unwrap();

        let updated = state.update_score(player.id, -5, -3).unwrap();
        assert_eq!((updated.runs, updated.balls), (0, 0));
        assert!(!updated.is_out);
    }

    #[test]
    fn test_update_score_unknown_player() {
        let mut state = MatchState::new();
        state.add_player("Virat").unwrap();
        let before = state.clone();
        let missing = Uuid::new_v4();

        assert_eq!(
            state.update_score(missing, 4, 1).unwrap_err(),
            GameError::PlayerNotFound(missing)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_rename_player() {
        let mut state = MatchState::new();
        let player = state.add_player("Virat").unwrap();

        let renamed = state.rename_player(player.id, "  King Kohli  ").unwrap();
        assert_eq!(renamed.name, "King Kohli");

        assert_eq!(
            state.rename_player(player.id, " ").unwrap_err(),
            GameError::EmptyPlayerName
        );
        let missing = Uuid::new_v4();
        assert_eq!(
            state.rename_player(missing, "Someone").unwrap_err(),
            GameError::PlayerNotFound(missing)
        );
        assert_eq!(names(&state), vec!["King Kohli"]);
    }

    #[test]
    fn test_rename_checks_name_before_lookup() {
        let mut state = MatchState::new();
        assert_eq!(
            state.rename_player(Uuid::new_v4(), "").unwrap_err(),
            GameError::EmptyPlayerName
        );
    }

    #[test]
    fn test_remove_player_preserves_order() {
        let mut state = MatchState::new();
        state.add_player("A").unwrap();
        let b = state.add_player("B").unwrap();
        state.add_player("C").unwrap();

        let removed = state.remove_player(b.id).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(names(&state), vec!["A", "C"]);

        assert_eq!(
            state.remove_player(b.id).unwrap_err(),
            GameError::PlayerNotFound(b.id)
        );
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_mark_out_twice() {
        let mut state = MatchState::new();
        let player = state.add_player("Virat").unwrap();

        state.mark_out(player.id).unwrap();
        let player = state.mark_out(player.id).unwrap();
        assert!(player.is_out);
    }

    #[test]
    fn test_reset_empties_match() {
        let mut state = MatchState::new();
        state.reset();
        assert!(state.is_empty());

        state.add_player("A").unwrap();
        state.add_player("B").unwrap();
        state.reset();
        assert!(state.is_empty());
    }
}
