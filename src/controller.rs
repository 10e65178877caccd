//! Control Change (CC) controller codes and their descriptions.

use crate::prelude::*;

/// Descriptions for every controller code.
///
/// Codes that the MIDI 1.0 Control Change table leaves undefined get a `Ctrl_<code>`
/// placeholder. Each of the 32 least-significant-byte codes is named after its MSB counterpart.
#[rustfmt::skip]
const DESCRIPTIONS: [&str; 128] = [
    // 0-31: continuous controllers, MSB
    "Bank_Select", "Modulation", "Breath_Ctrl", "Ctrl_3",
    "Foot_Ctrl", "Portamento_Time", "Data_Entry_MSB", "Chan_Vol",
    "Balance", "Ctrl_9", "Pan_Ctrl", "Exp_Pedal",
    "FX_Ctrl_1", "FX_Ctrl_2", "Ctrl_14", "Ctrl_15",
    "Gen_Pur_1", "Gen_Pur_2", "Gen_Pur_3", "Gen_Pur_4",
    "Ctrl_20", "Ctrl_21", "Ctrl_22", "Ctrl_23",
    "Ctrl_24", "Ctrl_25", "Ctrl_26", "Ctrl_27",
    "Ctrl_28", "Ctrl_29", "Ctrl_30", "Ctrl_31",
    // 32-63: continuous controllers, LSB
    "Bank_Sel_LSB", "Modulation_LSB", "Breath_Ctrl_LSB", "Ctrl_3_LSB",
    "Foot_Ctrl_LSB", "Portamento_Time_LSB", "Data_Entry_LSB", "Chan_Vol_LSB",
    "Balance_LSB", "Ctrl_9_LSB", "Pan_Ctrl_LSB", "Exp_Pedal_LSB",
    "FX_Ctrl_1_LSB", "FX_Ctrl_2_LSB", "Ctrl_14_LSB", "Ctrl_15_LSB",
    "Gen_Pur_1_LSB", "Gen_Pur_2_LSB", "Gen_Pur_3_LSB", "Gen_Pur_4_LSB",
    "Ctrl_20_LSB", "Ctrl_21_LSB", "Ctrl_22_LSB", "Ctrl_23_LSB",
    "Ctrl_24_LSB", "Ctrl_25_LSB", "Ctrl_26_LSB", "Ctrl_27_LSB",
    "Ctrl_28_LSB", "Ctrl_29_LSB", "Ctrl_30_LSB", "Ctrl_31_LSB",
    // 64-119: switches and single-byte controllers
    "Sus_Damp_Pedal_sw", "Portamento_sw", "Sostenuto_sw", "Soft_Pedal_sw",
    "Legato_Foot_sw", "Hold_2_sw", "Sound_Ctrl_1_Variation", "Sound_Ctrl_2_Tibre",
    "Sound_Ctrl_3_Release", "Sound_Ctrl_4_Attack", "Sound_Ctrl_5_Bright", "Sound_Ctrl_6_Decay",
    "Sound_Ctrl_7_Vib_Rate", "Sound_Ctrl_8_Vib_Depth", "Sound_Ctrl_9_Vib_Delay", "Sound_Ctrl_10",
    "Gen_Pur_5", "Gen_Pur_6", "Gen_Pur_7", "Gen_Pur_8",
    "Portamento_Ctrl", "Ctrl_85", "Ctrl_86", "Ctrl_87",
    "HR_Vel_Prefix", "Ctrl_89", "Ctrl_90", "FX_1_Depth_Reverb",
    "FX_2_Depth", "FX_3_Depth", "FX_4_Depth", "FX_5_Depth",
    "Data_Inc + Value", "Data_Dec + Value", "NRPN_LSB + Value", "NRPN_MSB + Value",
    "RPN_LSB + Value", "RPN_MSB + Value", "Ctrl_102", "Ctrl_103",
    "Ctrl_104", "Ctrl_105", "Ctrl_106", "Ctrl_107",
    "Ctrl_108", "Ctrl_109", "Ctrl_110", "Ctrl_111",
    "Ctrl_112", "Ctrl_113", "Ctrl_114", "Ctrl_115",
    "Ctrl_116", "Ctrl_117", "Ctrl_118", "Ctrl_119",
    // 120-127: channel mode messages
    "All_Sound_Off", "Reset_All_Ctrls", "Local_Ctrl_Sw", "All_Notes_Off",
    "Omni_Mode_Off", "Omni_Mode_On", "Mono_Mode_On", "Poly_Mode_On",
];

/// The broad category a controller code belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum ControllerKind {
    /// Codes 0-63.
    ///
    /// 14-bit continuous controllers: codes 0-31 carry the most significant byte and codes 32-63
    /// the least significant byte of the same controller.
    Continuous,
    /// Codes 64-119.
    ///
    /// On/off switches and single-byte controllers.
    Switch,
    /// Codes 120-127.
    ///
    /// Not really controllers, these change how the receiving channel behaves (all notes off,
    /// omni mode, mono/poly, etc...).
    ChannelMode,
}
impl ControllerKind {
    /// Categorize a controller code.
    #[inline]
    pub fn of(cc: u7) -> ControllerKind {
        match cc.as_int() {
            0..=63 => ControllerKind::Continuous,
            64..=119 => ControllerKind::Switch,
            _ => ControllerKind::ChannelMode,
        }
    }
}

/// Get the description of a controller code.
#[inline]
pub fn controller_description(cc: u7) -> &'static str {
    DESCRIPTIONS[cc.as_int() as usize]
}

/// Get a human-readable description of a Control Change code, such as `"Modulation"` for code 1.
///
/// Codes without a standard meaning are described as `"Ctrl_<code>"`.
/// Returns `None` only if the code is outside of `[0, 127]`.
#[inline]
pub fn cc_code_to_description(cc_code: i32) -> Option<&'static str> {
    match u7::try_from_i32(cc_code) {
        Some(cc) => Some(controller_description(cc)),
        None => rejected!("cc code", cc_code),
    }
}

/// Get the category of a Control Change code.
///
/// Returns `None` if the code is outside of `[0, 127]`.
#[inline]
pub fn cc_code_kind(cc_code: i32) -> Option<ControllerKind> {
    match u7::try_from_i32(cc_code) {
        Some(cc) => Some(ControllerKind::of(cc)),
        None => rejected!("cc code", cc_code),
    }
}

/// Find the Control Change code with exactly this description (case-sensitive).
///
/// This is a linear search over the description table.
pub fn description_to_cc_code(description: &str) -> Option<u8> {
    match DESCRIPTIONS.iter().position(|&known| known == description) {
        Some(idx) => Some(idx as u8),
        None => rejected!("cc description", description),
    }
}
