use directories::ProjectDirs;
use std::{env, fs, io, path};

pub enum DirMode {
	Create,
	DontCreate,
}

fn get_project_dirs() -> Option<ProjectDirs> {
	ProjectDirs::from("", "", "contfrac")
}

fn get_config_dir() -> Option<path::PathBuf> {
	// first try $CONTFRAC_CONFIG_DIR
	if let Some(env_var_config_dir) = env::var_os("CONTFRAC_CONFIG_DIR") {
		return Some(path::PathBuf::from(env_var_config_dir));
	}

	// otherwise try $XDG_CONFIG_HOME/contfrac/
	if let Some(env_var_xdg_config_dir) = env::var_os("XDG_CONFIG_HOME") {
		let mut res = path::PathBuf::from(env_var_xdg_config_dir);
		res.push("contfrac");
		return Some(res);
	}

	// Linux: $HOME/.config/contfrac
	// macOS: $HOME/Library/Application Support/contfrac
	// Windows: {FOLDERID_RoamingAppData}\contfrac\config
	Some(get_project_dirs()?.config_dir().to_path_buf())
}

pub fn get_config_file_location() -> Option<path::PathBuf> {
	let mut config_path = get_config_dir()?;
	config_path.push("config.toml");
	Some(config_path)
}

pub fn get_state_dir(mode: DirMode) -> io::Result<path::PathBuf> {
	let state_dir = env::var_os("CONTFRAC_STATE_DIR")
		.map(path::PathBuf::from)
		.or_else(|| {
			env::var_os("XDG_STATE_HOME").map(|dir| {
				let mut res = path::PathBuf::from(dir);
				res.push("contfrac");
				res
			})
		})
		.or_else(|| {
			// only Linux has a state dir, everything else keeps state with
			// the local data
			let dirs = get_project_dirs()?;
			Some(
				dirs.state_dir()
					.unwrap_or_else(|| dirs.data_local_dir())
					.to_path_buf(),
			)
		})
		.ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no state directory found"))?;
	if let DirMode::Create = mode {
		fs::create_dir_all(&state_dir)?;
	}
	Ok(state_dir)
}

pub fn get_history_file_location(mode: DirMode) -> io::Result<path::PathBuf> {
	let mut history_path = get_state_dir(mode)?;
	history_path.push("history");
	Ok(history_path)
}
