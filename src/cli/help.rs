//! Static text printed by `mark help` and `mark install`

/// Usage text for `mark help` and unknown commands
pub const HELP_TEXT: &str = "
Marks the current location.
If no command is specified, the current working directory is saved to the mark db.

Usage:
	mark [command]

Available Commands:
	help            Display this help menu
	add             Add the current working directory to the mark db (default action)
	back   <index>  Print the directory <index> levels above the current one
	clear           Clear all paths from the mark db
	delete <index>  Delete the path at <index> from the mark db
	get    [index]  Print the path at [index] in the mark db (default 0)
	list            List all marked paths by index
	install         Print directions to create move and back commands in your .bashrc

Options:
	--file <PATH>   Use PATH as the mark db instead of ~/.mark
	--debug         Log debug output to stderr
";

/// Shell functions for `mark install`
pub const INSTALL_TEXT: &str = r#"
Run the following commands to create a move function based on the index provided:

1. Add the following code to ~/.bashrc

move() {
	local readonly DEST=$(mark get $1)
	if [[ ! -z $DEST ]]; then
		cd $DEST
	fi
}

back() {
	local readonly DEST=$(mark back $1)
	if [[ ! -z $DEST ]]; then
		cd $DEST
	fi
}

2. Run the following command
source ~/.bashrc
"#;
