use soroban_sdk::{contracttype, Vec};

/// The voting power of an account (or the total supply) starting at a ledger sequence
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Checkpoint {
    pub sequence: u32,
    pub amount: i128,
}

/// Appends "to_add" to the checkpoints vector in place. A checkpoint for the same
/// sequence is replaced.
///
/// ### Arguments
/// * checkpoints - The checkpoints to add to
/// * to_add - The checkpoint to add
pub fn add_checkpoint(checkpoints: &mut Vec<Checkpoint>, to_add: &Checkpoint) {
    if let Some(last) = checkpoints.last() {
        if last.sequence == to_add.sequence {
            // last entry is no longer relevant
            checkpoints.pop_back();
        }
    }
    checkpoints.push_back(to_add.clone());
}

/// Return the amount for the most recent checkpoint that is less than or equal to the given sequence,
/// or zero if there is none.
///
/// ### Arguments
/// * checkpoints - The checkpoints to search
/// * sequence - The maximum sequence to search for
pub fn upper_lookup(checkpoints: &Vec<Checkpoint>, sequence: u32) -> i128 {
    let mut high = checkpoints.len();
    let mut low = 0;
    // Binary search for the highest checkpoint with a sequence less than or equal to the given sequence
    while low < high {
        let mid = (low + high) / 2;
        let entry = checkpoints.get_unchecked(mid);
        if entry.sequence > sequence {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    if high == 0 {
        0
    } else {
        checkpoints.get_unchecked(high - 1).amount
    }
}
