use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{GameState, Stage, Winner, SEATS};
use crate::hand::{evaluate, HandEvaluation};
use crate::logger::{ActionLog, ActionRecord};
use crate::player::{Player, PlayerAction, PlayerKind};
use crate::pot::Pot;
use crate::rules::{validate_action, Blinds, ValidatedAction};
use crate::snapshot::TableSnapshot;

/// Name and controller of one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub kind: PlayerKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub blinds: Blinds,
    pub seats: [SeatConfig; SEATS],
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            blinds: Blinds::default(),
            seats: [
                SeatConfig {
                    name: "Player".to_string(),
                    kind: PlayerKind::Human,
                },
                SeatConfig {
                    name: "AI".to_string(),
                    kind: PlayerKind::Ai,
                },
            ],
        }
    }
}

/// Heads-up Hold'em table: deals, runs betting rounds, settles the pot.
///
/// Every call runs to completion, including any stage changes it causes.
/// One engine is one game; callers serving several games keep one engine
/// per game.
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::Engine;
/// use holdem_engine::player::PlayerAction;
///
/// let mut engine = Engine::new_game(1000, 1000).unwrap();
/// engine.start_hand().unwrap();
///
/// // The button (seat 0 on the first hand) posted the small blind and acts first
/// let seat = engine.current_player().unwrap();
/// engine.apply_action(seat, PlayerAction::Fold).unwrap();
///
/// assert!(engine.is_round_over());
/// assert_eq!(engine.players()[1].stack(), 1005);
/// ```
#[derive(Debug)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// Human at seat 0, AI at seat 1, default blinds, OS-seeded deck.
    pub fn new_game(chips_a: u32, chips_b: u32) -> Result<Self, GameError> {
        Self::with_config(TableConfig::default(), [chips_a, chips_b], Deck::new())
    }

    pub fn with_config(
        config: TableConfig,
        stacks: [u32; SEATS],
        deck: Deck,
    ) -> Result<Self, GameError> {
        config.blinds.validate()?;
        // The pot and every stack are u32; the whole table must fit in one.
        stacks
            .iter()
            .try_fold(0u32, |acc, &s| acc.checked_add(s))
            .ok_or_else(|| {
                GameError::InvalidConfig(format!(
                    "total chips {} + {} exceed {}",
                    stacks[0],
                    stacks[1],
                    u32::MAX
                ))
            })?;
        Ok(Self::build(config, stacks, deck))
    }

    fn build(config: TableConfig, stacks: [u32; SEATS], deck: Deck) -> Self {
        let [a, b] = config.seats;
        let players = [
            Player::new(0, a.name, a.kind, stacks[0]),
            Player::new(1, b.name, b.kind, stacks[1]),
        ];
        Self {
            state: GameState::new(players, config.blinds, deck),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn players(&self) -> &[Player; SEATS] {
        self.state.players()
    }
    pub fn board(&self) -> &[Card] {
        self.state.board()
    }
    pub fn pot(&self) -> u32 {
        self.state.pot().total()
    }
    pub fn stage(&self) -> Stage {
        self.state.stage()
    }
    pub fn current_player(&self) -> Option<usize> {
        self.state.to_act()
    }
    pub fn current_bet(&self) -> u32 {
        self.state.current_bet()
    }
    pub fn min_raise(&self) -> u32 {
        self.state.min_raise()
    }
    pub fn blinds(&self) -> Blinds {
        self.state.blinds()
    }
    pub fn winners(&self) -> &[Winner] {
        self.state.winners()
    }
    pub fn log(&self) -> &ActionLog {
        self.state.log()
    }
    pub fn is_hand_in_progress(&self) -> bool {
        self.state.is_hand_in_progress()
    }
    pub fn is_round_over(&self) -> bool {
        self.state.is_round_over()
    }

    /// Chips `seat` must add to stay in the hand.
    pub fn to_call(&self, seat: usize) -> u32 {
        self.state
            .players
            .get(seat)
            .map_or(0, |p| p.to_call(self.state.current_bet))
    }

    /// Changes the blinds for the next hand.
    pub fn set_blinds(&mut self, blinds: Blinds) -> Result<(), GameError> {
        if self.state.in_progress {
            return Err(GameError::HandInProgress);
        }
        blinds.validate()?;
        self.state.blinds = blinds;
        Ok(())
    }

    /// Actions `seat` could submit right now without an `IllegalAction`.
    pub fn legal_actions(&self, seat: usize) -> Vec<PlayerAction> {
        if self.state.to_act != Some(seat) {
            return Vec::new();
        }
        let p = &self.state.players[seat];
        let mut actions = vec![PlayerAction::Fold];
        if p.to_call(self.state.current_bet) == 0 {
            actions.push(PlayerAction::Check);
        } else {
            actions.push(PlayerAction::Call);
        }
        if p.stack() > p.to_call(self.state.current_bet) {
            actions.push(PlayerAction::Raise(self.state.min_raise));
        }
        actions.push(PlayerAction::AllIn);
        actions
    }

    pub fn snapshot(&self, viewer: Option<usize>) -> TableSnapshot {
        TableSnapshot::capture(&self.state, viewer)
    }

    /// Shuffles a fresh deck, moves the button, posts blinds and deals hole
    /// cards. Stacks carry over from the previous hand.
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        if self.state.in_progress {
            return Err(GameError::HandInProgress);
        }
        if let Some(p) = self.state.players.iter().find(|p| p.stack() == 0) {
            return Err(GameError::PlayerBusted { seat: p.id() });
        }

        let s = &mut self.state;
        s.deck.shuffle();
        s.board.clear();
        s.winners.clear();
        s.pot = Pot::new();
        for p in &mut s.players {
            p.reset_for_hand();
        }
        s.log.start_hand();
        s.rotate_button();
        s.hand_number += 1;
        s.stage = Stage::Preflop;
        s.in_progress = true;
        s.round_over = false;
        s.current_bet = s.blinds.big;
        s.min_raise = s.blinds.big;

        let button = s.button;
        let line = format!(
            "Hand #{}: {} has the button",
            s.hand_number, s.players[button].name()
        );
        s.log.push(line);

        let (sb_seat, bb_seat) = (s.small_blind_seat(), s.big_blind_seat());
        let (small, big) = (s.blinds.small, s.blinds.big);
        self.post_blind(sb_seat, small, "small blind");
        self.post_blind(bb_seat, big, "big blind");

        let s = &mut self.state;
        for _ in 0..2 {
            for step in 1..=SEATS {
                let seat = (button + step) % SEATS;
                let card = s.deck.draw()?;
                s.players[seat].give_card(card);
            }
        }
        info!(
            hand = s.hand_number,
            button,
            stacks = ?s.players.iter().map(Player::stack).collect::<Vec<_>>(),
            "hand started"
        );

        match self.first_to_act_after(bb_seat) {
            Some(seat) => {
                self.state.to_act = Some(seat);
                Ok(())
            }
            None => self.close_round(),
        }
    }

    /// Applies `action` for `seat`. Rejected actions leave the state as it was.
    pub fn apply_action(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        if !self.state.in_progress {
            return Err(GameError::HandNotInProgress);
        }
        let expected = self.state.to_act.ok_or(GameError::HandNotInProgress)?;
        if seat != expected {
            return Err(GameError::NotYourTurn {
                expected,
                actual: seat,
            });
        }
        let player = &self.state.players[seat];
        if player.is_folded() {
            return Err(GameError::illegal("player already folded"));
        }
        let validated = validate_action(
            player.stack(),
            player.bet(),
            self.state.current_bet,
            self.state.min_raise,
            action,
        )?;

        let stage = self.state.stage;
        self.state.log.record(ActionRecord {
            seat,
            stage,
            action,
        });
        debug!(seat, ?action, ?validated, stage = stage.name(), "applying action");

        let name = self.state.players[seat].name().to_string();
        match validated {
            ValidatedAction::Fold => {
                self.state.players[seat].fold();
                self.state.log.push(format!("{} folds", name));
                if self.state.active_count() == 1 {
                    return self.award_uncontested();
                }
            }
            ValidatedAction::Check => {
                self.state.players[seat].mark_acted();
                self.state.log.push(format!("{} checks", name));
            }
            ValidatedAction::Call(chips) => {
                self.put_in(seat, chips);
                self.state.log.push(format!("{} calls {}", name, chips));
            }
            ValidatedAction::Raise(chips) | ValidatedAction::AllIn(chips) => {
                let previous_bet = self.state.current_bet;
                self.put_in(seat, chips);
                let total = self.state.players[seat].bet();
                let line = if total > previous_bet {
                    self.raise_to(seat, total);
                    if self.state.players[seat].stack() == 0 {
                        format!("{} goes all-in, raising to {}", name, total)
                    } else {
                        format!("{} raises to {}", name, total)
                    }
                } else {
                    format!("{} calls {} and is all-in", name, chips)
                };
                self.state.log.push(line);
            }
        }
        self.state.players[seat].mark_acted();

        match self.first_to_act_after(seat) {
            Some(next) => {
                self.state.to_act = Some(next);
                Ok(())
            }
            None => self.close_round(),
        }
    }

    fn post_blind(&mut self, seat: usize, amount: u32, label: &str) {
        let paid = self.put_in(seat, amount);
        let p = &self.state.players[seat];
        let line = if p.stack() == 0 {
            format!("{} posts {} {} and is all-in", p.name(), label, paid)
        } else {
            format!("{} posts {} {}", p.name(), label, paid)
        };
        self.state.log.push(line);
    }

    /// Moves chips from a stack into the pot; returns what was moved.
    fn put_in(&mut self, seat: usize, chips: u32) -> u32 {
        let paid = self.state.players[seat].commit(chips);
        self.state.pot.add(seat, paid);
        paid
    }

    fn raise_to(&mut self, seat: usize, total: u32) {
        let s = &mut self.state;
        let increment = total - s.current_bet;
        if increment >= s.min_raise {
            s.min_raise = increment;
        }
        s.current_bet = total;
        for (i, p) in s.players.iter_mut().enumerate() {
            if i != seat && p.is_active() {
                p.reopen_action();
            }
        }
    }

    fn needs_action(&self, seat: usize) -> bool {
        let s = &self.state;
        let p = &s.players[seat];
        if !p.can_act() {
            return false;
        }
        let opponent_can_act = s
            .players
            .iter()
            .any(|o| o.id() != seat && o.can_act());
        if !opponent_can_act && p.bet() >= s.current_bet {
            return false;
        }
        !p.has_acted() || p.bet() < s.current_bet
    }

    fn first_to_act_after(&self, from: usize) -> Option<usize> {
        (1..=SEATS)
            .map(|step| (from + step) % SEATS)
            .find(|&seat| self.needs_action(seat))
    }

    /// Ends the betting round and deals on until someone has a decision to
    /// make or the hand reaches showdown.
    fn close_round(&mut self) -> Result<(), GameError> {
        self.return_uncalled();
        loop {
            let next = self.state.stage.next();
            if next == Stage::Showdown {
                return self.showdown();
            }
            self.enter_stage(next)?;
            if let Some(seat) = self.first_to_act_after(self.state.button) {
                self.state.to_act = Some(seat);
                return Ok(());
            }
        }
    }

    fn return_uncalled(&mut self) {
        let s = &mut self.state;
        let Some(top) = (0..SEATS).max_by_key(|&i| s.players[i].bet()) else {
            return;
        };
        let second = (0..SEATS)
            .filter(|&i| i != top)
            .map(|i| s.players[i].bet())
            .max()
            .unwrap_or(0);
        let excess = s.players[top].bet().saturating_sub(second);
        if excess == 0 {
            return;
        }
        let returned = s.pot.refund(top, excess);
        s.players[top].refund(returned);
        s.current_bet = second;
        let line = format!("Uncalled {} returned to {}", returned, s.players[top].name());
        s.log.push(line);
    }

    fn enter_stage(&mut self, stage: Stage) -> Result<(), GameError> {
        let s = &mut self.state;
        for p in &mut s.players {
            p.reset_for_stage();
        }
        s.current_bet = 0;
        s.min_raise = s.blinds.big;
        s.to_act = None;

        s.deck.burn()?;
        for _ in 0..stage.cards_dealt() {
            let card = s.deck.draw()?;
            s.board.push(card);
        }
        s.stage = stage;
        let board = s
            .board
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        s.log
            .push(format!("*** {} *** [{}]", stage.name().to_uppercase(), board));
        debug!(stage = stage.name(), %board, pot = s.pot.total(), "stage dealt");
        Ok(())
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        self.state.stage = Stage::Showdown;
        self.state.to_act = None;

        let mut evaluations: Vec<(usize, HandEvaluation)> = Vec::with_capacity(SEATS);
        for seat in 0..SEATS {
            let p = &self.state.players[seat];
            if !p.is_active() {
                continue;
            }
            let mut cards = p.hole_cards().to_vec();
            cards.extend_from_slice(&self.state.board);
            evaluations.push((seat, evaluate(&cards)?));
        }

        let best = evaluations.iter().map(|(_, e)| e.value()).max().unwrap_or(0);
        let winning: Vec<usize> = evaluations
            .iter()
            .filter(|(_, e)| e.value() == best)
            .map(|(seat, _)| *seat)
            .collect();

        for (seat, eval) in &evaluations {
            let p = &mut self.state.players[*seat];
            let cards = p
                .hole_cards()
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            let line = format!("{} shows [{}] ({})", p.name(), cards, eval.description);
            p.reveal(Some(eval.clone()));
            self.state.log.push(line);
        }

        let payouts = self.state.pot.split(&winning);
        for (seat, amount) in payouts {
            let hand = evaluations
                .iter()
                .find(|(s, _)| *s == seat)
                .map(|(_, e)| e.clone());
            self.pay(seat, amount, hand);
        }
        self.finish_hand();
        Ok(())
    }

    fn award_uncontested(&mut self) -> Result<(), GameError> {
        let seat = self
            .state
            .players
            .iter()
            .position(Player::is_active)
            .ok_or_else(|| GameError::illegal("no active player left"))?;
        let payouts = self.state.pot.split(&[seat]);
        for (seat, amount) in payouts {
            self.pay(seat, amount, None);
        }
        self.finish_hand();
        Ok(())
    }

    fn pay(&mut self, seat: usize, amount: u32, hand: Option<HandEvaluation>) {
        let s = &mut self.state;
        s.players[seat].add_chips(amount);
        let line = match &hand {
            Some(h) => format!("{} wins {} with {}", s.players[seat].name(), amount, h.description),
            None => format!("{} wins {} uncontested", s.players[seat].name(), amount),
        };
        s.log.push(line);
        s.winners.push(Winner { seat, amount, hand });
    }

    fn finish_hand(&mut self) {
        let s = &mut self.state;
        s.in_progress = false;
        s.round_over = true;
        s.to_act = None;
        info!(
            hand = s.hand_number,
            stage = s.stage.name(),
            winners = ?s.winners.iter().map(|w| (w.seat, w.amount)).collect::<Vec<_>>(),
            "hand finished"
        );
    }
}
