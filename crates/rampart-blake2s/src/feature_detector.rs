// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
pub enum FeatureDetectorBehaviour {
    None,
    ForceSsse3False,
}

pub struct FeatureDetector {
    #[cfg(test)]
    behaviour: FeatureDetectorBehaviour,
}

impl FeatureDetector {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            #[cfg(test)]
            behaviour: FeatureDetectorBehaviour::None,
        }
    }

    // Platform-level SSSE3 detection (no test override)
    #[inline(always)]
    pub fn platform_has_ssse3(&self) -> bool {
        cpufeatures::new!(ssse3_detection, "ssse3");
        ssse3_detection::get()
    }

    #[inline(always)]
    pub fn has_ssse3(&self) -> bool {
        #[cfg(test)]
        {
            match self.behaviour {
                FeatureDetectorBehaviour::None => self.platform_has_ssse3(),
                FeatureDetectorBehaviour::ForceSsse3False => false,
            }
        }

        #[cfg(not(test))]
        self.platform_has_ssse3()
    }

    #[cfg(test)]
    pub fn change_behaviour(&mut self, behaviour: FeatureDetectorBehaviour) {
        self.behaviour = behaviour;
    }
}
