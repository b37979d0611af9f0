use soroban_sdk::{contracttype, Address, BytesN};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Chairperson,
    VoterCount,
    Proposals,
    Voter(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub name: BytesN<32>,
    pub vote_count: u64,
}

/// Rights, delegation and vote state of one participant.
///
/// `weight == 0` means the participant holds no right to vote. Once `voted`
/// is set the record is frozen.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub weight: u64,
    pub voted: bool,
    pub delegate: Option<Address>,
    pub vote: Option<u32>,
}

impl Voter {
    /// Record returned for an identity that was never written.
    pub fn unregistered() -> Self {
        Voter {
            weight: 0,
            voted: false,
            delegate: None,
            vote: None,
        }
    }

    pub fn has_right(&self) -> bool {
        self.weight != 0
    }
}
