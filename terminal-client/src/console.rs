use std::io::{BufRead, Write};

/// Line-oriented terminal I/O. Generic so runners can be driven from a
/// script in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
    }

    /// Prints `prompt` and reads one trimmed line. `None` on end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, String> {
        write!(self.output, "{} ", prompt).map_err(|e| format!("Failed to write output: {}", e))?;
        self.output
            .flush()
            .map_err(|e| format!("Failed to flush output: {}", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks until the answer parses as a number in `min..=max`.
    pub fn ask_number(&mut self, prompt: &str, min: u32, max: u32) -> Result<Option<u32>, String> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<u32>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                _ => self.say(&format!("Enter a number from {} to {}.", min, max))?,
            }
        }
    }

    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, String> {
        let answer = self.ask(&format!("{} [y/N]", prompt))?;
        Ok(matches!(answer.as_deref(), Some("y" | "Y" | "yes" | "Yes")))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
