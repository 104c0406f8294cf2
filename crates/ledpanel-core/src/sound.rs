//! Alarm pattern and the party melody

use crate::state::Channel::{self, Blue as B, Green as G, Red as R};

/// A repeated fixed-pitch beep.
#[derive(Debug, Clone, Copy)]
pub struct AlarmPattern {
    pub beeps: u8,
    pub frequency_hz: u32,
    pub beep_ms: u32,
    pub pause_ms: u32,
}

/// Five 100 ms beeps at 1 kHz, 200 ms apart.
pub const ALARM: AlarmPattern = AlarmPattern {
    beeps: 5,
    frequency_hz: 1000,
    beep_ms: 100,
    pause_ms: 200,
};

/// One melody step: a tone and the channel lit while it sounds.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub light: Channel,
}

/// Level of the channel lit during a note.
pub const MELODY_LEVEL: u8 = 30;

/// Silence between notes, so repeated pitches stay distinct.
pub const NOTE_GAP_MS: u32 = 40;

const C5: u32 = 523;
const D5: u32 = 587;
const E5: u32 = 659;
const F5: u32 = 698;
const G4: u32 = 392;
const A4: u32 = 440;
const B4: u32 = 494;
const G5: u32 = 784;

const fn note(frequency_hz: u32, duration_ms: u32, light: Channel) -> Note {
    Note {
        frequency_hz,
        duration_ms,
        light,
    }
}

/// "Happy Birthday", one channel per note.
pub const MELODY: &[Note] = &[
    note(G4, 300, R),
    note(G4, 100, G),
    note(A4, 400, B),
    note(G4, 400, R),
    note(C5, 400, G),
    note(B4, 800, B),
    note(G4, 300, R),
    note(G4, 100, G),
    note(A4, 400, B),
    note(G4, 400, R),
    note(D5, 400, G),
    note(C5, 800, B),
    note(G4, 300, R),
    note(G4, 100, G),
    note(G5, 400, B),
    note(E5, 400, R),
    note(C5, 400, G),
    note(B4, 400, B),
    note(A4, 800, R),
    note(F5, 300, G),
    note(F5, 100, B),
    note(E5, 400, R),
    note(C5, 400, G),
    note(D5, 400, B),
    note(C5, 1200, R),
];
