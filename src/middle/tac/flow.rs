//! 流状态管理
//!
//! Temporary and label counters for one generation run. Both start at 1 and
//! are owned by the run, so every call numbers from `t1` / `L1` again.

/// 标签生成器
#[derive(Debug)]
pub struct LabelGenerator {
    next_label: usize,
}

impl Default for LabelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelGenerator {
    pub fn new() -> Self {
        LabelGenerator { next_label: 1 }
    }
    pub fn next(&mut self) -> Label {
        let label = Label(self.next_label);
        self.next_label += 1;
        label
    }
}

/// 临时变量生成器
#[derive(Debug)]
pub struct TempGenerator {
    next_temp: usize,
}

impl Default for TempGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TempGenerator {
    pub fn new() -> Self {
        TempGenerator { next_temp: 1 }
    }
    pub fn next(&mut self) -> Temp {
        let temp = Temp(self.next_temp);
        self.next_temp += 1;
        temp
    }
}

/// Temporary `tN`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Temp(pub usize);

impl std::fmt::Display for Temp {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Jump label `LN`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(pub usize);

impl std::fmt::Display for Label {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}
