use tactile_ui::Pointer;

use crate::config::PointerStep;

/// 按帧展开的脚本化指针输入
pub struct Timeline {
    steps: Vec<PointerStep>,
    index: usize,
    used: u32,
}

impl Timeline {
    pub fn new(steps: Vec<PointerStep>) -> Self {
        Self { steps, index: 0, used: 0 }
    }

    /// 剩余帧数
    pub fn remaining(&self) -> u32 {
        self.steps
            .iter()
            .skip(self.index)
            .map(|s| s.frames)
            .sum::<u32>()
            .saturating_sub(self.used)
    }
}

impl Iterator for Timeline {
    type Item = Pointer;

    fn next(&mut self) -> Option<Pointer> {
        loop {
            let step = self.steps.get(self.index)?;
            if self.used < step.frames {
                self.used += 1;
                return Some(Pointer::new(step.x, step.y, step.pressed));
            }
            self.index += 1;
            self.used = 0;
        }
    }
}
