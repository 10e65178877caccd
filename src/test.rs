use crate::{
    cc_code_kind, cc_code_to_description, controller_description, description_to_cc_code,
    frequency_to_key, frequency_to_note, key_frequency, key_name, name_to_note, note_or_name,
    note_to_frequency, note_to_name, num::u7, ControllerKind, ErrorKind, NoteName, NoteOrName,
    PitchClass, HIGHEST_FREQUENCY, LOWEST_FREQUENCY,
};

/// Check a list of note numbers against their expected names, in both directions.
fn test_names(list: &[(i32, &str)]) {
    for &(note, name) in list {
        assert_eq!(note_to_name(note), Some(name), "naming note {}", note);
        assert_eq!(name_to_note(name), Some(note as u8), "parsing {:?}", name);
    }
}

/// Check that none of the given names are accepted.
fn test_rejected_names(list: &[&str]) {
    for name in list {
        assert_eq!(name_to_note(name), None, "{:?} should be rejected", name);
    }
}

mod name {
    use super::*;

    #[test]
    fn known_names() {
        test_names(&[
            (0, "C-1"),
            (1, "C#-1"),
            (11, "B-1"),
            (12, "C0"),
            (21, "A0"),
            (60, "C4"),
            (69, "A4"),
            (70, "A#4"),
            (79, "G5"),
            (104, "G#7"),
            (120, "C9"),
            (127, "G9"),
        ]);
    }

    #[test]
    fn top_note_is_g9() {
        // Note 127 is sometimes documented as "F#9", but F#9 is note 126.
        assert_eq!(note_to_name(127), Some("G9"));
        assert_eq!(note_to_name(126), Some("F#9"));
        assert_eq!(name_to_note("F#9"), Some(126));
        assert_eq!(name_to_note("G#9"), None);
    }

    #[test]
    fn round_trip() {
        for note in 0..=127 {
            let name = note_to_name(note).unwrap();
            assert_eq!(name_to_note(name), Some(note as u8));
        }
    }

    #[test]
    fn out_of_range_notes() {
        for &note in &[-1000, -12, -1, 128, 255, 256, i32::MIN, i32::MAX] {
            assert_eq!(note_to_name(note), None, "note {}", note);
        }
    }

    #[test]
    fn unparsable_names() {
        test_rejected_names(&[
            "", "#", "#4", "H4", "C", "C#", "Cb4", "Bb3", "E#4", "C##4", "C4.5", "C4x", "CC4",
            "C-2", "C10", "B9", "Ä4", "C99999999999",
        ]);
    }

    #[test]
    fn table_matches_formula() {
        for key in u7::all() {
            let name = NoteName::from_key(key);
            assert_eq!(name.to_string(), key_name(key));
            assert_eq!(name.as_str(), key_name(key));
            assert_eq!(name.key(), key);
            assert_eq!(i32::from(name.octave()), key.as_int() as i32 / 12 - 1);
            assert_eq!(name.pitch().index(), key.as_int() % 12);
        }
    }

    #[test]
    fn pitch_classes() {
        for (idx, pitch) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pitch.index() as usize, idx);
            assert_eq!(PitchClass::from_index(idx as u8), *pitch);
            assert_eq!(PitchClass::from_index(idx as u8 + 24), *pitch);
            assert_eq!(pitch.to_string(), pitch.as_str());
        }
        assert_eq!(PitchClass::FSharp.as_str(), "F#");
        assert!(PitchClass::FSharp.is_sharp());
        assert!(!PitchClass::E.is_sharp());
    }

    #[test]
    fn note_name_new() {
        assert_eq!(
            NoteName::new(PitchClass::G, 9).map(NoteName::key),
            Some(u7::new(127))
        );
        assert_eq!(NoteName::new(PitchClass::GSharp, 9), None);
        assert_eq!(NoteName::new(PitchClass::C, -2), None);
        assert_eq!(NoteName::new(PitchClass::C, 10), None);
    }

    #[test]
    fn parse_errors() {
        let kind = |name: &str| NoteName::parse(name).unwrap_err().kind();
        assert_eq!(kind(""), ErrorKind::Invalid("empty note name"));
        assert_eq!(kind("H4"), ErrorKind::Invalid("unknown pitch letter"));
        assert_eq!(kind("C#x"), ErrorKind::Invalid("octave is not an integer"));
        assert_eq!(kind("C11"), ErrorKind::Invalid("octave out of range"));
        assert_eq!(kind("A9"), ErrorKind::Invalid("note above G9"));
        assert_eq!(
            NoteName::parse("A9").unwrap_err().to_string(),
            "invalid note name: note above G9"
        );
    }

    #[test]
    fn from_str() {
        let name: NoteName = "C#-1".parse().unwrap();
        assert_eq!(name.pitch(), PitchClass::CSharp);
        assert_eq!(name.octave(), -1);
        assert_eq!(u7::from(name), 1);
        assert!("Db4".parse::<NoteName>().is_err());
    }

    #[test]
    #[cfg_attr(feature = "strict", should_panic)]
    fn lenient_names() {
        assert_eq!(name_to_note("a#4"), Some(70));
        assert_eq!(name_to_note("g5"), Some(79));
        assert_eq!(name_to_note("C+4"), Some(60));
        assert_eq!(name_to_note("C04"), Some(60));
        assert_eq!(name_to_note("C 4 "), Some(60));
    }

    #[test]
    #[cfg(feature = "strict")]
    fn strict_names() {
        for name in &["a#4", "C+4", "C04", "C 4", "C-0"] {
            match NoteName::parse(name).unwrap_err().kind() {
                ErrorKind::Malformed(_) => {}
                kind => panic!("{:?} gave {:?}", name, kind),
            }
        }
        assert_eq!(name_to_note("A#4"), Some(70));
    }
}

mod dispatch {
    use super::*;

    #[test]
    fn note_or_name_both_ways() {
        assert_eq!(note_or_name("G5"), Some(NoteOrName::Note(79)));
        assert_eq!(note_or_name(79), Some(NoteOrName::Name("G5")));
        assert_eq!(note_or_name(u7::new(70)), Some(NoteOrName::Name("A#4")));
        assert_eq!(note_or_name(NoteOrName::Name("A#4")), Some(NoteOrName::Note(70)));
    }

    #[test]
    fn note_or_name_preserves_absence() {
        assert_eq!(note_or_name(128), None);
        assert_eq!(note_or_name(-1), None);
        assert_eq!(note_or_name("G#9"), None);
        assert_eq!(note_or_name("nonsense"), None);
    }

    #[test]
    fn note_or_name_matches_direct_calls() {
        for note in -5..=135 {
            assert_eq!(note_or_name(note), note_to_name(note).map(NoteOrName::Name));
        }
        for note in 0..=127 {
            let name = note_to_name(note).unwrap();
            assert_eq!(
                note_or_name(name),
                name_to_note(name).map(|n| NoteOrName::Note(n.into()))
            );
        }
    }
}

mod frequency {
    use super::*;

    #[test]
    fn known_frequencies() {
        assert_eq!(note_to_frequency(60), Some(261.625));
        assert_eq!(note_to_frequency(69), Some(440.0));
        assert_eq!(note_to_frequency(57), Some(220.0));
        assert_eq!(note_to_frequency(21), Some(27.5));
        assert_eq!(note_to_frequency(0), Some(8.175));
        assert_eq!(note_to_frequency(127), Some(12543.853));
    }

    #[test]
    fn known_notes() {
        assert_eq!(frequency_to_note(261.63), Some(60));
        assert_eq!(frequency_to_note(440.0), Some(69));
        assert_eq!(frequency_to_note(445.0), Some(69));
        assert_eq!(frequency_to_note(460.0), Some(70));
        assert_eq!(frequency_to_note(LOWEST_FREQUENCY), Some(0));
        assert_eq!(frequency_to_note(HIGHEST_FREQUENCY), Some(127));
    }

    #[test]
    fn round_trip() {
        for note in 0..=127 {
            let frequency = note_to_frequency(note).unwrap();
            assert_eq!(frequency_to_note(frequency), Some(note as u8), "note {}", note);
        }
        for key in u7::all() {
            assert_eq!(frequency_to_key(key_frequency(key)), Some(key));
        }
    }

    #[test]
    fn monotonic() {
        let mut last = 0.0;
        for key in u7::all() {
            let frequency = key_frequency(key);
            assert!(frequency > last, "note {} is not above the previous one", key);
            last = frequency;
        }
    }

    #[test]
    fn rounds_to_nearest() {
        // A quarter tone above and below A4.
        let quarter = 2f64.powf(1.0 / 24.0);
        assert_eq!(frequency_to_note(440.0 * quarter * 0.999), Some(69));
        assert_eq!(frequency_to_note(440.0 * quarter * 1.001), Some(70));
        assert_eq!(frequency_to_note(440.0 / quarter * 1.001), Some(69));
        assert_eq!(frequency_to_note(440.0 / quarter * 0.999), Some(68));
    }

    #[test]
    fn out_of_range() {
        for &note in &[-1, 128, i32::MIN, i32::MAX] {
            assert_eq!(note_to_frequency(note), None);
        }
        for &frequency in &[
            0.0,
            -0.0,
            -440.0,
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
            1.0,
            7.5,
            13000.0,
            20000.0,
        ] {
            assert_eq!(frequency_to_note(frequency), None, "{} Hz", frequency);
        }
    }

    #[test]
    fn just_outside_range_rounds_in() {
        assert_eq!(frequency_to_note(8.0), Some(0));
        assert_eq!(frequency_to_note(12800.0), Some(127));
    }
}

mod controller {
    use super::*;

    #[test]
    fn known_descriptions() {
        assert_eq!(cc_code_to_description(0), Some("Bank_Select"));
        assert_eq!(cc_code_to_description(1), Some("Modulation"));
        assert_eq!(cc_code_to_description(7), Some("Chan_Vol"));
        assert_eq!(cc_code_to_description(24), Some("Ctrl_24"));
        assert_eq!(cc_code_to_description(64), Some("Sus_Damp_Pedal_sw"));
        assert_eq!(cc_code_to_description(123), Some("All_Notes_Off"));
        assert_eq!(cc_code_to_description(127), Some("Poly_Mode_On"));
    }

    #[test]
    fn total_over_range() {
        for cc in 0..=127 {
            let description = cc_code_to_description(cc).unwrap();
            assert!(!description.is_empty(), "cc {} has no description", cc);
        }
        for &cc in &[-1, 128, 1000, i32::MIN] {
            assert_eq!(cc_code_to_description(cc), None);
            assert_eq!(cc_code_kind(cc), None);
        }
    }

    #[test]
    fn placeholders_carry_their_code() {
        for cc in u7::all() {
            let description = controller_description(cc);
            if let Some(code) = description.strip_prefix("Ctrl_") {
                if !code.contains('_') {
                    assert_eq!(code.parse::<u8>().ok(), Some(cc.as_int()));
                }
            }
        }
    }

    #[test]
    fn lsb_mirrors_msb() {
        for cc in 0..32 {
            let msb = controller_description(u7::new(cc));
            let lsb = controller_description(u7::new(cc + 32));
            assert!(lsb.ends_with("_LSB"), "{} is not an LSB", lsb);
            if msb.starts_with("Ctrl_") {
                assert_eq!(&lsb[..lsb.len() - 4], msb);
            }
        }
    }

    #[test]
    fn kinds() {
        assert_eq!(cc_code_kind(1), Some(ControllerKind::Continuous));
        assert_eq!(cc_code_kind(63), Some(ControllerKind::Continuous));
        assert_eq!(cc_code_kind(64), Some(ControllerKind::Switch));
        assert_eq!(cc_code_kind(119), Some(ControllerKind::Switch));
        assert_eq!(cc_code_kind(120), Some(ControllerKind::ChannelMode));
        assert_eq!(cc_code_kind(127), Some(ControllerKind::ChannelMode));
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(description_to_cc_code("Modulation"), Some(1));
        assert_eq!(description_to_cc_code("Ctrl_24"), Some(24));
        assert_eq!(description_to_cc_code("modulation"), None);
        assert_eq!(description_to_cc_code(""), None);
        for cc in u7::all() {
            assert_eq!(
                description_to_cc_code(controller_description(cc)),
                Some(cc.as_int())
            );
        }
    }
}

mod primitive {
    use super::*;

    #[test]
    fn u7_validation() {
        assert_eq!(u7::try_from_i32(0), Some(u7::new(0)));
        assert_eq!(u7::try_from_i32(127), Some(u7::max_value()));
        assert_eq!(u7::try_from_i32(128), None);
        assert_eq!(u7::try_from_i32(-1), None);
        assert_eq!(u7::try_from(200), None);
        assert_eq!(u7::from(200), 72);
        assert_eq!(u7::all().len(), 128);
    }
}
