/// Settings key of the boolean that silently suppresses bad-vibe votes.
pub const CENSOR_BAD_VIBES_KEY: &str = "censor_bad_vibes";

/// Label fragments identifying the three tallied vibe categories.
pub const GOOD_VIBES_LABEL: &str = "Good Vibes";
pub const NEUTRAL_VIBES_LABEL: &str = "Neutral Vibes";
pub const BAD_VIBES_LABEL: &str = "Bad Vibes";

/// The category whose votes are dropped while censorship is active.
pub const SUPPRESSED_VIBE_LABEL: &str = BAD_VIBES_LABEL;

/// Message returned to a voter whose vote was suppressed.
pub const CENSORED_VOTE_MESSAGE: &str = "Vote received, but action modified due to policy.";
