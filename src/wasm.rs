//! JavaScript-facing wrapper used by the page.
//!
//! Engine errors surface as thrown `Error`s; rejected moves are plain `false`.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;
use crate::types::CellState;

#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<WasmGame, JsError> {
        Ok(Self {
            inner: Game::new(size)?,
        })
    }

    /// Builds a game from a `{ size }` object.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config: JsValue) -> Result<WasmGame, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|err| JsError::new(&err.to_string()))?
        };
        Ok(Self {
            inner: Game::from_config(&config)?,
        })
    }

    pub fn play(&mut self, col: usize, row: usize) -> Result<bool, JsError> {
        Ok(self.inner.play((col, row))?)
    }

    pub fn pass(&mut self) -> Result<(), JsError> {
        self.inner.pass()?;
        Ok(())
    }

    #[wasm_bindgen(js_name = endGame)]
    pub fn end_game(&mut self) {
        self.inner.end_game();
    }

    #[wasm_bindgen(js_name = getSize)]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    #[wasm_bindgen(js_name = getCurrentColor)]
    pub fn current_color(&self) -> CellState {
        self.inner.current_color().into()
    }

    #[wasm_bindgen(js_name = getStateByPos)]
    pub fn state_by_pos(&self, col: usize, row: usize) -> Result<CellState, JsError> {
        Ok(self.inner.state_at((col, row))?)
    }

    #[wasm_bindgen(js_name = getScore)]
    pub fn score(&self, color: CellState) -> Result<u32, JsError> {
        let color = color
            .color()
            .ok_or_else(|| JsError::new("an empty point has no score"))?;
        Ok(self.inner.score(color))
    }

    /// `[black, white]` capture counts.
    #[wasm_bindgen(js_name = getScores)]
    pub fn scores(&self) -> Vec<u32> {
        self.inner.scores().to_vec()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    #[wasm_bindgen(js_name = isInAtari)]
    pub fn is_in_atari(&self) -> bool {
        self.inner.is_in_atari()
    }

    #[wasm_bindgen(js_name = isAttemptedSuicide)]
    pub fn is_attempted_suicide(&self) -> bool {
        self.inner.is_attempted_suicide()
    }

    /// `"Atari"`, `"Suicide"`, `"GameOver"` or `undefined`.
    #[wasm_bindgen(js_name = getNotification)]
    pub fn notification(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.notification())
    }

    #[wasm_bindgen(js_name = getState)]
    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_state())
    }

    #[wasm_bindgen(js_name = getResult)]
    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_result())
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsError::new(&err.to_string()))
}
