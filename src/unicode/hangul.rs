//! Algorithmic Hangul syllable decomposition and composition (Unicode §3.12).

use smallvec::SmallVec;

pub const S_BASE: u32 = 0xAC00;
pub const L_BASE: u32 = 0x1100;
pub const V_BASE: u32 = 0x1161;
/// One less than the first trailing consonant; `T_BASE` itself means "no trailing jamo".
pub const T_BASE: u32 = 0x11A7;
pub const L_COUNT: u32 = 19;
pub const V_COUNT: u32 = 21;
pub const T_COUNT: u32 = 28;
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

#[inline(always)]
pub const fn is_syllable(cp: u32) -> bool {
    cp.wrapping_sub(S_BASE) < S_COUNT
}

#[inline(always)]
const fn is_leading(cp: u32) -> bool {
    cp.wrapping_sub(L_BASE) < L_COUNT
}

#[inline(always)]
const fn is_vowel(cp: u32) -> bool {
    cp.wrapping_sub(V_BASE) < V_COUNT
}

#[inline(always)]
const fn is_trailing(cp: u32) -> bool {
    cp > T_BASE && cp < T_BASE + T_COUNT
}

/// True for jamo that can combine with a preceding L jamo or LV syllable.
#[inline(always)]
pub const fn is_composable_jamo(cp: u32) -> bool {
    is_vowel(cp) || is_trailing(cp)
}

/// `LV` → `L V`, `LVT` → `L V T`; `None` outside the syllable block.
#[inline]
pub fn decompose(cp: u32) -> Option<SmallVec<[u32; 3]>> {
    if !is_syllable(cp) {
        return None;
    }
    let s_index = cp - S_BASE;
    let mut jamo = SmallVec::new();
    jamo.push(L_BASE + s_index / N_COUNT);
    jamo.push(V_BASE + (s_index % N_COUNT) / T_COUNT);
    let t_index = s_index % T_COUNT;
    if t_index != 0 {
        jamo.push(T_BASE + t_index);
    }
    Some(jamo)
}

/// `L + V` → `LV`, `LV + T` → `LVT`.
#[inline]
pub const fn compose(starter: u32, jamo: u32) -> Option<u32> {
    if is_leading(starter) && is_vowel(jamo) {
        let lv_index = (starter - L_BASE) * V_COUNT + (jamo - V_BASE);
        return Some(S_BASE + lv_index * T_COUNT);
    }
    if is_syllable(starter) && (starter - S_BASE) % T_COUNT == 0 && is_trailing(jamo) {
        return Some(starter + (jamo - T_BASE));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ga_round_trips() {
        assert_eq!(compose(0x1100, 0x1161), Some(0xAC00));
        assert_eq!(decompose(0xAC00).unwrap().as_slice(), &[0x1100, 0x1161]);
    }

    #[test]
    fn lvt_syllable() {
        // 각 = ᄀ ᅡ ᆨ
        assert_eq!(decompose(0xAC01).unwrap().as_slice(), &[0x1100, 0x1161, 0x11A8]);
        assert_eq!(compose(0xAC00, 0x11A8), Some(0xAC01));
        // An LVT syllable does not take a second trailing consonant.
        assert_eq!(compose(0xAC01, 0x11A8), None);
    }

    #[test]
    fn block_edges() {
        assert!(is_syllable(0xD7A3));
        assert!(!is_syllable(0xD7A4));
        assert!(!is_syllable(0xABFF));
        assert!(decompose(0x0041).is_none());
        // T_BASE itself is not a trailing consonant.
        assert_eq!(compose(0xAC00, T_BASE), None);
        assert!(!is_composable_jamo(T_BASE));
        assert!(is_composable_jamo(0x11C2));
    }
}
