// Membership
pub const ERR_NOT_A_MEMBER: &str = "Caller is not a member";
pub const ERR_MEMBER_EXISTS: &str = "Member already exists";
pub const ERR_MEMBER_NOT_FOUND: &str = "Member not found";
pub const ERR_BALANCE_UNDERFLOW: &str = "Member balance underflow";

// Assets
pub const ERR_ASSET_EXISTS: &str = "Asset already exists";
pub const ERR_ASSET_NOT_FOUND: &str = "Asset not found";
pub const ERR_ASSET_NOT_CONTRACT: &str = "Asset must be a smart contract";
pub const ERR_SWAP_SAME_ASSET: &str = "Swap source and destination must differ";

// Proposals and voting
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal not found";
pub const ERR_PROPOSAL_EXPIRED: &str = "Proposal has expired";
pub const ERR_VOTING_PERIOD_PASSED: &str = "Voting period has passed";
pub const ERR_ALREADY_VOTED: &str = "Member has already voted";
pub const ERR_VOTING_IN_PROGRESS: &str = "Voting or grace period is in progress";
pub const ERR_GRACE_IN_PROGRESS: &str = "Grace period is in progress";
pub const ERR_PROPOSAL_REJECTED: &str = "Proposal was rejected";

// Amounts
pub const ERR_WRONG_DEPOSIT: &str = "The sent funds amount differs from proposed";
pub const ERR_UNEXPECTED_PAYMENT: &str = "Proposal does not accept funds";
pub const ERR_ONLY_AUTHOR_DEPOSITS: &str = "Only the author can fund a deposit proposal";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be positive";
pub const ERR_AMOUNT_EXCEEDS_BALANCE: &str = "Amount exceeds balance";
pub const ERR_INSUFFICIENT_NATIVE: &str = "Insufficient native funds";
pub const ERR_INVALID_PERCENTAGE: &str = "Exit share should be maximum 100%";
pub const ERR_EXIT_TOO_SMALL: &str = "Exit share is too small";
pub const ERR_ARITHMETIC_OVERFLOW: &str = "Arithmetic overflow";
