use std::fmt;
use std::str::FromStr;
use std::sync::atomic::Ordering;

/// Memory ordering requested for an atomic operation.
///
/// Every operation accepts one so that code written against the general
/// atomics contract ports unchanged. The lock backend treats every token the
/// same way: each operation runs in a full critical section, which already
/// orders it like `SeqCst` with respect to the guarded value. The native
/// backend maps the token onto [`Ordering`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MemoryOrder {
    /// No ordering constraints, only atomicity.
    Relaxed,

    /// Data-dependent acquire. Treated as `Acquire` wherever it matters.
    Consume,

    /// Acquire ordering, for loads.
    Acquire,

    /// Release ordering, for stores.
    Release,

    /// Both `Acquire` and `Release`, for read-modify-write operations.
    AcqRel,

    /// Sequential consistency. Used by every implicit operation.
    SeqCst,
}

/// Error returned when parsing a [`MemoryOrder`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMemoryOrderError {
    /// The input was empty.
    #[error("memory order cannot be empty")]
    Empty,

    /// The input named no known ordering.
    #[error("unknown memory order `{0}`")]
    Unknown(String),
}

impl MemoryOrder {
    /// Every token, weakest first.
    pub const ALL: [MemoryOrder; 6] = [
        MemoryOrder::Relaxed,
        MemoryOrder::Consume,
        MemoryOrder::Acquire,
        MemoryOrder::Release,
        MemoryOrder::AcqRel,
        MemoryOrder::SeqCst,
    ];

    /// Canonical lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            MemoryOrder::Relaxed => "relaxed",
            MemoryOrder::Consume => "consume",
            MemoryOrder::Acquire => "acquire",
            MemoryOrder::Release => "release",
            MemoryOrder::AcqRel => "acq_rel",
            MemoryOrder::SeqCst => "seq_cst",
        }
    }

    /// The ordering a failed compare-exchange uses when `self` is requested
    /// for the whole operation.
    ///
    /// A failed CAS performs no store, so the release half is dropped.
    pub fn failure(self) -> MemoryOrder {
        use self::MemoryOrder::*;

        match self {
            Relaxed | Release => Relaxed,
            Consume => Consume,
            Acquire | AcqRel => Acquire,
            SeqCst => SeqCst,
        }
    }

    /// Ordering to use for a pure load.
    pub(crate) fn load(self) -> Ordering {
        use self::MemoryOrder::*;

        match self {
            Relaxed => Ordering::Relaxed,
            Consume | Acquire | AcqRel => Ordering::Acquire,
            // A load has no release half, so `Release` keeps only atomicity.
            Release => Ordering::Relaxed,
            SeqCst => Ordering::SeqCst,
        }
    }

    /// Ordering to use for a pure store.
    pub(crate) fn store(self) -> Ordering {
        use self::MemoryOrder::*;

        match self {
            Relaxed | Consume | Acquire => Ordering::Relaxed,
            Release | AcqRel => Ordering::Release,
            SeqCst => Ordering::SeqCst,
        }
    }

    /// Ordering to use for a read-modify-write.
    pub(crate) fn rmw(self) -> Ordering {
        self.into()
    }
}

impl Default for MemoryOrder {
    fn default() -> MemoryOrder {
        MemoryOrder::SeqCst
    }
}

impl fmt::Display for MemoryOrder {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

impl FromStr for MemoryOrder {
    type Err = ParseMemoryOrderError;

    fn from_str(s: &str) -> Result<MemoryOrder, ParseMemoryOrderError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(ParseMemoryOrderError::Empty);
        }

        let order = match s.to_ascii_lowercase().as_str() {
            "relaxed" => MemoryOrder::Relaxed,
            "consume" => MemoryOrder::Consume,
            "acquire" => MemoryOrder::Acquire,
            "release" => MemoryOrder::Release,
            "acq_rel" | "acqrel" => MemoryOrder::AcqRel,
            "seq_cst" | "seqcst" => MemoryOrder::SeqCst,
            _ => return Err(ParseMemoryOrderError::Unknown(s.to_string())),
        };

        Ok(order)
    }
}

impl From<Ordering> for MemoryOrder {
    fn from(order: Ordering) -> MemoryOrder {
        match order {
            Ordering::Relaxed => MemoryOrder::Relaxed,
            Ordering::Acquire => MemoryOrder::Acquire,
            Ordering::Release => MemoryOrder::Release,
            Ordering::AcqRel => MemoryOrder::AcqRel,
            // `Ordering` is non-exhaustive; anything newer is at most as
            // strong as `SeqCst`.
            _ => MemoryOrder::SeqCst,
        }
    }
}

impl From<MemoryOrder> for Ordering {
    fn from(order: MemoryOrder) -> Ordering {
        match order {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Consume | MemoryOrder::Acquire => Ordering::Acquire,
            MemoryOrder::Release => Ordering::Release,
            MemoryOrder::AcqRel => Ordering::AcqRel,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }
}
