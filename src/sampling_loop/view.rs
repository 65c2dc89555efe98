#[derive(Debug, Clone, PartialEq)]
pub struct ClassStatus {
    pub label: String,
    pub example_count: usize,
    pub confidence: Option<f32>,
    pub selected: bool,
}

impl ClassStatus {
    pub fn describe(&self) -> String {
        if self.example_count == 0 {
            return "No examples added".to_string();
        }
        let percent = self.confidence.unwrap_or(0.0) * 100.0;
        format!("{} examples - {:.0}%", self.example_count, percent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub loop_active: bool,
    pub training: Option<usize>,
    pub classes: Vec<ClassStatus>,
}
