/// Pitch number to note name, sharps spelled with `s` and octaves counted from pitch 0
///
/// Pitch 36 (General MIDI bass drum) is `C_3`, pitch 44 (pedal hi-hat) is `Gs_3`.
const NOTE_NAMES: [&str; 128] = [
    "C_0", "Cs_0", "D_0", "Ds_0", "E_0", "F_0", "Fs_0", "G_0", "Gs_0", "A_0", "As_0", "B_0",
    "C_1", "Cs_1", "D_1", "Ds_1", "E_1", "F_1", "Fs_1", "G_1", "Gs_1", "A_1", "As_1", "B_1",
    "C_2", "Cs_2", "D_2", "Ds_2", "E_2", "F_2", "Fs_2", "G_2", "Gs_2", "A_2", "As_2", "B_2",
    "C_3", "Cs_3", "D_3", "Ds_3", "E_3", "F_3", "Fs_3", "G_3", "Gs_3", "A_3", "As_3", "B_3",
    "C_4", "Cs_4", "D_4", "Ds_4", "E_4", "F_4", "Fs_4", "G_4", "Gs_4", "A_4", "As_4", "B_4",
    "C_5", "Cs_5", "D_5", "Ds_5", "E_5", "F_5", "Fs_5", "G_5", "Gs_5", "A_5", "As_5", "B_5",
    "C_6", "Cs_6", "D_6", "Ds_6", "E_6", "F_6", "Fs_6", "G_6", "Gs_6", "A_6", "As_6", "B_6",
    "C_7", "Cs_7", "D_7", "Ds_7", "E_7", "F_7", "Fs_7", "G_7", "Gs_7", "A_7", "As_7", "B_7",
    "C_8", "Cs_8", "D_8", "Ds_8", "E_8", "F_8", "Fs_8", "G_8", "Gs_8", "A_8", "As_8", "B_8",
    "C_9", "Cs_9", "D_9", "Ds_9", "E_9", "F_9", "Fs_9", "G_9", "Gs_9", "A_9", "As_9", "B_9",
    "C_10", "Cs_10", "D_10", "Ds_10", "E_10", "F_10", "Fs_10", "G_10",
];

/// Convert a MIDI pitch to its note name (e.g., 36 -> "C_3")
pub fn note_name(pitch: u8) -> &'static str {
    NOTE_NAMES[(pitch & 0x7f) as usize]
}

/// Look a note name back up to its pitch
pub fn pitch_from_name(name: &str) -> Option<u8> {
    NOTE_NAMES
        .iter()
        .position(|&candidate| candidate == name)
        .map(|pitch| pitch as u8)
}
