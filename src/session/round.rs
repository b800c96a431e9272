use std::ops::Range;

// --- Round ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Round {
    One,
    Two,
    Three,
}

impl Round {
    pub fn number(self) -> u8 {
        match self {
            Round::One => 1,
            Round::Two => 2,
            Round::Three => 3,
        }
    }

    pub fn index(self) -> usize {
        (self.number() - 1) as usize
    }

    pub fn next(self) -> Option<Round> {
        match self {
            Round::One => Some(Round::Two),
            Round::Two => Some(Round::Three),
            Round::Three => None,
        }
    }

    pub fn all() -> &'static [Round] {
        &[Round::One, Round::Two, Round::Three]
    }
}

// --- Sub-step ---

/// The three phases inside a round: keywords revealed for study, blanks
/// filled in, then the graded review.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubStep {
    Reveal,
    Fill,
    Review,
}

impl SubStep {
    pub fn number(self) -> u8 {
        match self {
            SubStep::Reveal => 1,
            SubStep::Fill => 2,
            SubStep::Review => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubStep::Reveal => "reveal",
            SubStep::Fill => "fill",
            SubStep::Review => "review",
        }
    }
}

// --- Round plan ---

/// Contiguous partition of the scan-ordered keyword instances into three
/// rounds. Reference sizes [5, 7, 8]: instances 0..5, 5..12, 12..20.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundPlan {
    sizes: [usize; 3],
}

impl RoundPlan {
    pub const DEFAULT_SIZES: [usize; 3] = [5, 7, 8];

    pub fn new(sizes: [usize; 3]) -> Self {
        Self { sizes }
    }

    pub fn size(&self, round: Round) -> usize {
        self.sizes[round.index()]
    }

    /// Half-open instance index range owned by `round`.
    pub fn span(&self, round: Round) -> Range<usize> {
        let start: usize = self.sizes[..round.index()].iter().sum();
        start..start + self.sizes[round.index()]
    }

    /// Configured instance total through this round; the score display
    /// denominator basis (5, 12, 20 in the reference plan).
    pub fn cumulative(&self, round: Round) -> usize {
        self.sizes[..=round.index()].iter().sum()
    }

    pub fn total(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Which round owns a 0-based instance index; `None` past the plan.
    pub fn round_of(&self, index: usize) -> Option<Round> {
        Round::all()
            .iter()
            .copied()
            .find(|&round| self.span(round).contains(&index))
    }
}

impl Default for RoundPlan {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZES)
    }
}
