//! Player commands and their text form.
//!
//! A command line is a verb followed by its arguments:
//!
//! ```text
//! move Main Street
//! work Woman in Red Dress
//! upgrade 3 $          (or: upgrade cr 3)
//! save monday
//! ```
//!
//! A line that stops short of its arguments parses to
//! [`ParseError::Missing`], which tells the caller what to ask for next.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::PlayerId;
use crate::definitions::Currency;

/// The first word of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    Move,
    Work,
    Upgrade,
    Rehearse,
    Act,
    End,
    Who,
    Where,
    Board,
    Help,
    Save,
    Load,
    Quit,
}

impl Verb {
    pub const ALL: [Verb; 13] = [
        Verb::Move,
        Verb::Work,
        Verb::Upgrade,
        Verb::Rehearse,
        Verb::Act,
        Verb::End,
        Verb::Who,
        Verb::Where,
        Verb::Board,
        Verb::Help,
        Verb::Save,
        Verb::Load,
        Verb::Quit,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Verb::Move => "move",
            Verb::Work => "work",
            Verb::Upgrade => "upgrade",
            Verb::Rehearse => "rehearse",
            Verb::Act => "act",
            Verb::End => "end",
            Verb::Who => "who",
            Verb::Where => "where",
            Verb::Board => "board",
            Verb::Help => "help",
            Verb::Save => "save",
            Verb::Load => "load",
            Verb::Quit => "quit",
        }
    }

    /// One line of help text.
    #[must_use]
    pub fn usage(self) -> &'static str {
        match self {
            Verb::Move => "move <location>      walk to a neighboring location",
            Verb::Work => "work <role>          take a role where you stand",
            Verb::Upgrade => "upgrade <rank> <$|cr> buy a rank at the Casting Office",
            Verb::Rehearse => "rehearse             gain a rehearsal token",
            Verb::Act => "act                  roll for your scene",
            Verb::End => "end                  end your turn",
            Verb::Who => "who                  show your player",
            Verb::Where => "where                show your location",
            Verb::Board => "board                show every player and scene",
            Verb::Help => "help                 show this list",
            Verb::Save => "save <name>          save the game",
            Verb::Load => "load <name>          load a saved game",
            Verb::Quit => "quit                 leave the game",
        }
    }

    /// Display-only verbs never change the game.
    #[must_use]
    pub fn is_informational(self) -> bool {
        matches!(self, Verb::Who | Verb::Where | Verb::Board | Verb::Help)
    }

    /// Verbs that are kept in the game history.
    #[must_use]
    pub fn is_recorded(self) -> bool {
        matches!(
            self,
            Verb::Move | Verb::Work | Verb::Upgrade | Verb::Rehearse | Verb::Act | Verb::End
        )
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Verb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_ascii_lowercase();
        Verb::ALL
            .into_iter()
            .find(|v| v.name() == word)
            .ok_or(ParseError::UnknownVerb(word))
    }
}

/// An argument a command still needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Argument {
    Destination,
    Role,
    TargetRank,
    /// Payment for an upgrade to `rank`.
    Currency { rank: u8 },
    SaveName,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Destination => write!(f, "a destination"),
            Argument::Role => write!(f, "a role"),
            Argument::TargetRank => write!(f, "a target rank"),
            Argument::Currency { .. } => write!(f, "a currency ($ or cr)"),
            Argument::SaveName => write!(f, "a save name"),
        }
    }
}

/// Why a line did not parse into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("type a command, or \"help\" for a list")]
    Empty,

    #[error("unknown command {0:?}; type \"help\" for a list")]
    UnknownVerb(String),

    #[error("{verb} needs {argument}")]
    Missing { verb: Verb, argument: Argument },

    #[error("{0:?} is not a rank or a currency")]
    BadArgument(String),
}

/// A fully specified player command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move { destination: String },
    Work { role: String },
    Upgrade { rank: u8, currency: Currency },
    Rehearse,
    Act,
    End,
    Who,
    Where,
    Board,
    Help,
    Save { name: String },
    Load { name: String },
    Quit,
}

impl Command {
    #[must_use]
    pub fn verb(&self) -> Verb {
        match self {
            Command::Move { .. } => Verb::Move,
            Command::Work { .. } => Verb::Work,
            Command::Upgrade { .. } => Verb::Upgrade,
            Command::Rehearse => Verb::Rehearse,
            Command::Act => Verb::Act,
            Command::End => Verb::End,
            Command::Who => Verb::Who,
            Command::Where => Verb::Where,
            Command::Board => Verb::Board,
            Command::Help => Verb::Help,
            Command::Save { .. } => Verb::Save,
            Command::Load { .. } => Verb::Load,
            Command::Quit => Verb::Quit,
        }
    }

    /// Parse one input line.
    ///
    /// Multi-word names (locations, roles) are everything after the verb,
    /// with runs of whitespace collapsed. Arguments after an argument-free
    /// verb are ignored.
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let mut words = line.split_whitespace();
        let verb: Verb = words.next().ok_or(ParseError::Empty)?.parse()?;
        let rest: Vec<&str> = words.collect();
        let joined = rest.join(" ");

        let missing = |argument| ParseError::Missing { verb, argument };

        let command = match verb {
            Verb::Move if joined.is_empty() => return Err(missing(Argument::Destination)),
            Verb::Move => Command::Move { destination: joined },
            Verb::Work if joined.is_empty() => return Err(missing(Argument::Role)),
            Verb::Work => Command::Work { role: joined },
            Verb::Upgrade => {
                let mut rank = None;
                let mut currency = None;
                for word in rest {
                    if let Ok(r) = word.parse::<u8>() {
                        rank = Some(r);
                    } else if let Ok(c) = word.parse::<Currency>() {
                        currency = Some(c);
                    } else {
                        return Err(ParseError::BadArgument(word.to_string()));
                    }
                }
                let rank = rank.ok_or_else(|| missing(Argument::TargetRank))?;
                let currency = currency.ok_or_else(|| missing(Argument::Currency { rank }))?;
                Command::Upgrade { rank, currency }
            }
            Verb::Rehearse => Command::Rehearse,
            Verb::Act => Command::Act,
            Verb::End => Command::End,
            Verb::Who => Command::Who,
            Verb::Where => Command::Where,
            Verb::Board => Command::Board,
            Verb::Help => Command::Help,
            Verb::Save | Verb::Load if joined.is_empty() => {
                return Err(missing(Argument::SaveName))
            }
            Verb::Save => Command::Save { name: joined },
            Verb::Load => Command::Load { name: joined },
            Verb::Quit => Command::Quit,
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move { destination } => write!(f, "move {}", destination),
            Command::Work { role } => write!(f, "work {}", role),
            Command::Upgrade { rank, currency } => {
                write!(f, "upgrade {} {}", rank, currency.token())
            }
            Command::Save { name } => write!(f, "save {}", name),
            Command::Load { name } => write!(f, "load {}", name),
            other => f.write_str(other.verb().name()),
        }
    }
}

/// A command that was executed, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub command: Command,

    /// Day the command was executed on.
    pub day: u32,

    /// Position in the history, from 0.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, command: Command, day: u32, sequence: u32) -> Self {
        Self {
            player,
            command,
            day,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(Command::parse("act"), Ok(Command::Act));
        assert_eq!(Command::parse("  END  "), Ok(Command::End));
        assert_eq!(Command::parse("who extra words"), Ok(Command::Who));
    }

    #[test]
    fn test_parse_multi_word_names() {
        assert_eq!(
            Command::parse("move  Main   Street"),
            Ok(Command::Move {
                destination: "Main Street".to_string()
            })
        );
        assert_eq!(
            Command::parse("work Woman in Red Dress"),
            Ok(Command::Work {
                role: "Woman in Red Dress".to_string()
            })
        );
    }

    #[test]
    fn test_parse_upgrade_either_order() {
        let expected = Ok(Command::Upgrade {
            rank: 3,
            currency: Currency::Credits,
        });
        assert_eq!(Command::parse("upgrade 3 cr"), expected);
        assert_eq!(Command::parse("upgrade cr 3"), expected);
    }

    #[test]
    fn test_parse_missing_arguments() {
        assert_eq!(
            Command::parse("move"),
            Err(ParseError::Missing {
                verb: Verb::Move,
                argument: Argument::Destination
            })
        );
        assert_eq!(
            Command::parse("upgrade"),
            Err(ParseError::Missing {
                verb: Verb::Upgrade,
                argument: Argument::TargetRank
            })
        );
        assert_eq!(
            Command::parse("upgrade 4"),
            Err(ParseError::Missing {
                verb: Verb::Upgrade,
                argument: Argument::Currency { rank: 4 }
            })
        );
        assert_eq!(
            Command::parse("load"),
            Err(ParseError::Missing {
                verb: Verb::Load,
                argument: Argument::SaveName
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("   "), Err(ParseError::Empty));
        assert_eq!(
            Command::parse("dance now"),
            Err(ParseError::UnknownVerb("dance".to_string()))
        );
        assert_eq!(
            Command::parse("upgrade 3 gold"),
            Err(ParseError::BadArgument("gold".to_string()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        for line in ["move Secret Hideout", "upgrade 5 $", "save game one", "rehearse"] {
            let command = Command::parse(line).unwrap();
            assert_eq!(command.to_string(), line);
        }
    }

    #[test]
    fn test_verb_classes() {
        assert!(Verb::Board.is_informational());
        assert!(!Verb::Act.is_informational());
        assert!(Verb::End.is_recorded());
        assert!(!Verb::Save.is_recorded());
        assert!(!Verb::Who.is_recorded());
    }
}
