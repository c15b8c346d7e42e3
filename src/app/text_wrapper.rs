/// Greedy word wrapper used both to render message bodies and to measure their height, so the
/// measured content height always matches what is drawn.
#[derive(Debug, Clone, Copy)]
pub struct TextWrapper {
    width: usize,
}

impl TextWrapper {
    pub fn new(width: u16) -> Self {
        Self {
            width: (width as usize).max(1),
        }
    }

    pub fn wrap_text(&self, text: &str) -> Vec<String> {
        let mut wrapped_lines = Vec::new();

        for original_line in text.lines() {
            if original_line.trim().is_empty() {
                wrapped_lines.push(String::new());
                continue;
            }

            let mut current = String::new();
            let mut current_len = 0;

            for word in original_line.split_whitespace() {
                let mut word: Vec<char> = word.chars().collect();

                // Words wider than the line are split mid-word
                while word.len() > self.width {
                    if current_len > 0 {
                        wrapped_lines.push(std::mem::take(&mut current));
                        current_len = 0;
                    }
                    let rest = word.split_off(self.width);
                    wrapped_lines.push(word.into_iter().collect());
                    word = rest;
                }

                if word.is_empty() {
                    continue;
                }

                let needed = if current_len == 0 {
                    word.len()
                } else {
                    current_len + 1 + word.len()
                };

                if needed > self.width {
                    wrapped_lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }

                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.extend(word.iter());
                current_len += word.len();
            }

            if current_len > 0 {
                wrapped_lines.push(current);
            }
        }

        // An empty body still occupies a row
        if wrapped_lines.is_empty() {
            wrapped_lines.push(String::new());
        }

        wrapped_lines
    }

    pub fn line_count(&self, text: &str) -> usize {
        self.wrap_text(text).len()
    }
}
