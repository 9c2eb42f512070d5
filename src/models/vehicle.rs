use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Engine has zero horsepower and cannot start
    NoPower(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NoPower(kind) => write!(f, "Engine ({}) cannot start: 0 horsepower", kind),
        }
    }
}

impl std::error::Error for EngineError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    kind: String,
    horsepower: u32,
}

impl Engine {
    pub fn new(kind: impl Into<String>, horsepower: u32) -> Self {
        Self {
            kind: kind.into(),
            horsepower,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn horsepower(&self) -> u32 {
        self.horsepower
    }

    pub fn start(&self) -> Result<(), EngineError> {
        if self.horsepower == 0 {
            return Err(EngineError::NoPower(self.kind.clone()));
        }
        info!("Engine ({}, {}hp) started", self.kind, self.horsepower);
        Ok(())
    }

    pub fn stop(&self) {
        info!("Engine ({}) stopped", self.kind);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new("Unknown", 0)
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}hp", self.kind, self.horsepower)
    }
}

/// Car that owns its engine
#[derive(Debug, Clone)]
pub struct Car {
    model: String,
    color: String,
    engine: Engine,
}

impl Car {
    /// Build a car around an existing engine (moved in; clone it to keep a copy)
    pub fn new(model: impl Into<String>, color: impl Into<String>, engine: Engine) -> Self {
        Self {
            model: model.into(),
            color: color.into(),
            engine,
        }
    }

    /// Build a car and its engine in one step
    pub fn with_engine_spec(
        model: impl Into<String>,
        color: impl Into<String>,
        kind: impl Into<String>,
        horsepower: u32,
    ) -> Self {
        Self::new(model, color, Engine::new(kind, horsepower))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn start(&self) -> Result<(), EngineError> {
        info!("{} is trying to start", self.model);
        self.engine.start()
    }

    pub fn stop(&self) {
        info!("{} is stopping", self.model);
        self.engine.stop();
    }
}

impl std::fmt::Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{}]", self.model, self.color, self.engine)
    }
}
