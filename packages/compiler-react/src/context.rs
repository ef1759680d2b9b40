use std::cell::RefCell;
use std::rc::Rc;

/// Options for JSX generation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Use category-specific tags (`header`, `nav`, …) instead of `div`
    pub semantic: bool,
    /// Spaces per indent level
    pub indent_width: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            semantic: false,
            indent_width: 2,
        }
    }
}

impl CompileOptions {
    pub fn semantic() -> Self {
        Self {
            semantic: true,
            ..Self::default()
        }
    }
}

/// Compilation context for managing state during code generation
pub struct CompilerContext {
    buffer: Rc<RefCell<String>>,
    indent_level: Rc<RefCell<usize>>,
    pub options: CompileOptions,
}

impl CompilerContext {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(String::new())),
            indent_level: Rc::new(RefCell::new(0)),
            options,
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn add_line(&self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_indented(&self, text: &str) {
        let indent = self.indent();
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(&indent);
        buffer.push_str(text);
    }

    /// Add multi-line text at the current indent, keeping its relative indentation
    pub fn add_block(&self, text: &str) {
        let text = text.trim();
        let mut lines = text.lines();
        let Some(first) = lines.next() else {
            return;
        };
        self.add_line(first.trim_end());

        let rest: Vec<&str> = lines.collect();
        let common = rest
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.len() - line.trim_start().len())
            .min()
            .unwrap_or(0);

        for line in rest {
            if line.trim().is_empty() {
                self.add("\n");
            } else {
                let line = line.get(common..).unwrap_or_else(|| line.trim_start());
                self.add_line(line.trim_end());
            }
        }
    }

    /// An empty line, without trailing indentation
    pub fn blank_line(&self) {
        self.add("\n");
    }

    pub fn push_indent(&self) {
        *self.indent_level.borrow_mut() += 1;
    }

    pub fn pop_indent(&self) {
        let mut level = self.indent_level.borrow_mut();
        if *level > 0 {
            *level -= 1;
        }
    }

    fn indent(&self) -> String {
        " ".repeat(self.options.indent_width * *self.indent_level.borrow())
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }
}
