pub static ERROR_ZERO_AMOUNT: &[u8] = b"amount must be positive";
pub static ERROR_INSUFFICIENT_STAKE: &[u8] = b"insufficient stake";
pub static ERROR_NOT_ELIGIBLE: &[u8] = b"not eligible";
pub static ERROR_PROPOSAL_NOT_FOUND: &[u8] = b"proposal not found";
pub static ERROR_DUPLICATE_VOTE: &[u8] = b"duplicate vote";
pub static ERROR_ALREADY_FINALIZED: &[u8] = b"proposal already finalized";
pub static ERROR_INSUFFICIENT_TREASURY: &[u8] = b"insufficient treasury";
pub static ERROR_UNAUTHORIZED: &[u8] = b"unauthorized";
pub static ERROR_VOTING_PERIOD_ACTIVE: &[u8] = b"voting period still active";
pub static ERROR_INVALID_POLICY: &[u8] = b"invalid governance policy";
